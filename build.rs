use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    println!("cargo:rerun-if-changed=data/activities.json");
    // Directory hint: cargo walks it and compares mtimes.
    println!("cargo:rerun-if-changed=static");

    let build_id = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs().to_string(),
        Err(_) => "dev".to_string(),
    };
    println!("cargo:rustc-env=ACTIVITIES_BUILD_ID={build_id}");
}
