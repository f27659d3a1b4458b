use std::fs;
use std::path::Path;

/// Copies the trunk build of the form into `static/dist`, which `main.rs`
/// embeds. Without a frontend build the checked-in placeholder is kept.
fn main() {
    let out_dir = Path::new("static/dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        if let Err(e) = fs::create_dir_all(out_dir) {
            panic!("cannot create {}: {e}", out_dir.display());
        }
        if let Err(e) = fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new()
                .overwrite(true)
                .content_only(true),
        ) {
            panic!("cannot copy frontend build: {e}");
        }
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
