//! This build script records the UTC epoch at compile time so the simulated
//! host clock has a base without needing a wall-clock source at run time.

use std::{env, fs::File, io::Write, path::PathBuf};

fn main() {
    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());

    // create rs file with current UTC time
    File::create(out.join("utc.rs"))
        .unwrap()
        .write_fmt(format_args!(
            "const UTC_EPOCH: i64 = {:?};",
            chrono::offset::Local::now().timestamp()
        ))
        .unwrap();
}
