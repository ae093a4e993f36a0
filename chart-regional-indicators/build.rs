use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Stage the happiness report CSV into OUT_DIR for include_str!.
    // The fallback keeps the crate buildable without the fixture; the
    // loader still needs all required headers, so give it two regions.
    let src = Path::new("../fixtures/world-happiness-report-2021.csv");
    let dest = Path::new(&out_dir).join("world-happiness-report-2021.csv");
    if src.exists() {
        fs::copy(src, &dest).unwrap();
    } else {
        fs::write(
            &dest,
            "Country name,Regional indicator,Ladder score,Social support,Healthy life expectancy,Freedom to make life choices\n\
             Finland,Western Europe,7.842,0.954,72.0,0.949\n\
             Japan,East Asia,5.940,0.884,75.1,0.796\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/world-happiness-report-2021.csv");
}
