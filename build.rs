fn main() {
    // Stamp the binary with its build time, surfaced via `--version` output.
    println!(
        "cargo:rustc-env=BUILD_DATE={}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
}
