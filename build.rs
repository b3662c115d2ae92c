fn main() {
  compile_backend_header();
}

fn compile_backend_header() {
  let crate_name = std::env::var("CARGO_PKG_NAME").unwrap();
  let crate_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
  let lib_dir = std::path::Path::new(&crate_dir).join("lib");
  let header_path = lib_dir.join(format!("{}.h", crate_name));

  std::fs::create_dir_all(&lib_dir).expect("Failed to create lib directory");

  cbindgen::Builder::new()
    .with_crate(&crate_dir)
    .with_language(cbindgen::Language::C)
    .with_include_guard(format!("{}_H", crate_name.to_uppercase()))
    .generate()
    .expect("Failed to generate C header")
    .write_to_file(header_path);

  println!("cargo:rerun-if-changed=backend");
  println!("cargo:rerun-if-changed=build.rs");
}
