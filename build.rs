fn main() {
    // toml-cfg は cfg.toml をコンパイル時に読み込む
    println!("cargo:rerun-if-changed=cfg.toml");
}
