fn main() {
    println!("cargo:rerun-if-changed=src/web/index.html");

    // Host builds (`--no-default-features`) have no ESP-IDF environment to export.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
