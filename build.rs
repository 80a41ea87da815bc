fn main() {
    println!("cargo:rerun-if-changed=src/ffi.rs");
    println!("cargo:rerun-if-changed=src/types.rs");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    let crate_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => dir,
        Err(_) => return,
    };
    let out_dir = "include";

    if let Err(e) = std::fs::create_dir_all(out_dir) {
        println!("cargo:warning=Failed to create include directory: {e}");
        return;
    }

    let header_path = std::path::Path::new(&out_dir).join("rpn_rs.h");

    let mut config = match cbindgen::Config::from_file("cbindgen.toml") {
        Ok(config) => config,
        Err(e) => {
            println!("cargo:warning=Failed to load cbindgen.toml: {e}");
            return;
        }
    };

    // Only one precision define at a time, matching the Real alias in lib.rs
    if std::env::var("CARGO_FEATURE_F32").is_ok() {
        let _ = config.after_includes.insert("#define USE_F32".to_string());
    } else {
        let _ = config.after_includes.insert("#define USE_F64".to_string());
    }

    match cbindgen::Builder::new()
        .with_crate(crate_dir)
        .with_config(config)
        .generate()
    {
        Ok(bindings) => {
            bindings.write_to_file(header_path);
        }
        Err(e) => {
            // Header generation is best effort; the Rust library does not depend on it.
            println!("cargo:warning=Unable to generate bindings: {e}");
        }
    }
}
