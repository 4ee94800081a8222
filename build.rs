const EMAILJS_VARS: [(&str, &str); 3] = [
    ("PORTFOLIO_EMAILJS_SERVICE_ID", "service_portfolio"),
    ("PORTFOLIO_EMAILJS_TEMPLATE_ID", "template_contact"),
    ("PORTFOLIO_EMAILJS_PUBLIC_KEY", "public_key_unset"),
];

fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // EmailJS identifiers are baked into the WASM bundle
    for (var, default) in EMAILJS_VARS {
        let value = std::env::var(var).unwrap_or_else(|_| default.to_string());
        println!("cargo:rustc-env={}={}", var, value);
        println!("cargo:rerun-if-env-changed={}", var);
    }

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
