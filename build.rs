//! Build script for us-address-rs
//!
//! The regex backend needs nothing from this script. When the `libpostal`
//! feature is enabled it:
//! - Locates a system libpostal through pkg-config
//! - Generates FFI bindings with bindgen

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=LIBPOSTAL_NO_PKG_CONFIG");
    println!("cargo:rerun-if-env-changed=LIBPOSTAL_LIB_DIR");
    println!("cargo:rerun-if-env-changed=LIBPOSTAL_INCLUDE_DIR");

    #[cfg(feature = "libpostal")]
    libpostal::configure();
}

#[cfg(feature = "libpostal")]
mod libpostal {
    use std::env;
    use std::path::{Path, PathBuf};

    pub fn configure() {
        let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

        let include_dirs = match probe_pkg_config() {
            Some(dirs) => dirs,
            None => link_from_env(),
        };

        generate_bindings(&out_dir, &include_dirs);
    }

    /// Try to use system libpostal via pkg-config
    fn probe_pkg_config() -> Option<Vec<PathBuf>> {
        if env::var("LIBPOSTAL_NO_PKG_CONFIG").is_ok() {
            return None;
        }

        match pkg_config::probe_library("libpostal") {
            Ok(library) => Some(library.include_paths),
            Err(e) => {
                println!("cargo:warning=pkg-config could not find libpostal: {e}");
                None
            }
        }
    }

    /// Fall back to explicit directories from the environment
    fn link_from_env() -> Vec<PathBuf> {
        if let Ok(lib_dir) = env::var("LIBPOSTAL_LIB_DIR") {
            println!("cargo:rustc-link-search=native={lib_dir}");
        }
        println!("cargo:rustc-link-lib=postal");

        if cfg!(target_os = "linux") {
            println!("cargo:rustc-link-lib=m");
        }

        env::var("LIBPOSTAL_INCLUDE_DIR")
            .map(|dir| vec![PathBuf::from(dir)])
            .unwrap_or_default()
    }

    /// Generate FFI bindings for the parser half of the libpostal API
    fn generate_bindings(out_dir: &Path, include_dirs: &[PathBuf]) {
        let wrapper_path = out_dir.join("wrapper.h");
        std::fs::write(&wrapper_path, "#include <libpostal/libpostal.h>\n")
            .expect("Failed to write wrapper.h");

        let mut builder = bindgen::Builder::default()
            .header(wrapper_path.to_string_lossy())
            .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
            .rust_edition(bindgen::RustEdition::Edition2024)
            .allowlist_function("libpostal_setup.*")
            .allowlist_function("libpostal_get_address_parser_default_options")
            .allowlist_function("libpostal_parse_address")
            .allowlist_function("libpostal_address_parser_response_destroy")
            .allowlist_type("libpostal_address_parser_.*")
            .derive_default(true)
            .derive_debug(true);

        for dir in include_dirs {
            builder = builder.clang_arg(format!("-I{}", dir.display()));
        }

        let bindings = builder.generate().expect("Unable to generate bindings");

        bindings
            .write_to_file(out_dir.join("bindings.rs"))
            .expect("Failed to write bindings");
    }
}
