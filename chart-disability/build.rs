use std::env;
use std::fs;
use std::path::Path;

const HEADER: &str = "state,id,Any Disability,Cognitive Disability,Hearing Disability,Mobility Disability,Vision Disability,Self-care Disability,Independent Living Disability,18-44,45-64,65+,Male,Female\n";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy disability.csv to OUT_DIR for include_str. Without the fixture the
    // app still builds and shows an empty map.
    let src = Path::new("../fixtures/disability.csv");
    let dest = Path::new(&out_dir).join("disability.csv");
    if src.exists() {
        fs::copy(src, &dest).unwrap();
    } else {
        println!("cargo:warning=fixtures/disability.csv not found; embedding an empty table");
        fs::write(&dest, HEADER).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/disability.csv");
}
