use std::env;
use std::fs;
use std::path::Path;

/// Single-square topology used when the boundary fixture is missing, so the
/// app still builds and shows every district as unmatched.
const FALLBACK_TOPOLOGY: &str = r#"{"type":"Topology","arcs":[[[77.5,10.5],[78.5,10.5],[78.5,11.5],[77.5,11.5],[77.5,10.5]]],"objects":{"tamil":{"type":"GeometryCollection","geometries":[{"type":"Polygon","id":"TN","arcs":[[0]],"properties":{"name":"Tamil Nadu"}}]}}}"#;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    // Copy the district boundaries to OUT_DIR for include_str
    let topo_src = Path::new("../fixtures/tamil-nadu.topo.json");
    let topo_dest = Path::new(&out_dir).join("tamil-nadu.topo.json");
    if topo_src.exists() {
        fs::copy(topo_src, &topo_dest).expect("failed to copy tamil-nadu.topo.json");
    } else {
        println!("cargo:warning=fixtures/tamil-nadu.topo.json not found, using placeholder outline");
        fs::write(&topo_dest, FALLBACK_TOPOLOGY).expect("failed to write placeholder topology");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/tamil-nadu.topo.json");
}
