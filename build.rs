use std::env;

/// Forwards a build-time setting to the crate, falling back to a default.
fn forward(name: &str, default: &str) {
    println!("cargo:rerun-if-env-changed={}", name);
    match env::var(name) {
        Ok(value) => {
            println!("cargo:rustc-env={}={}", name, value);
            println!("cargo:warning=Using {} from environment: {}", name, value);
        }
        Err(_) => println!("cargo:rustc-env={}={}", name, default),
    }
}

fn main() {
    // Loop gap (ms) after which the stall supervisor resynchronizes all timers
    forward("POLL_TIMER_STALL_MS", "1000");

    // Default signed tick offsets applied to timers built from BuildConfig
    forward("POLL_TIMER_MS_OFFSET", "0");
    forward("POLL_TIMER_US_OFFSET", "0");
}
