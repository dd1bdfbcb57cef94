fn main() {
    let head = std::path::Path::new(".git/HEAD");
    if head.exists() {
        println!("cargo:rerun-if-changed=.git/HEAD");
        println!("cargo:rerun-if-changed=.git/refs/heads");
    }

    let output = std::process::Command::new("git")
        .args(["describe", "--always", "--tags", "--dirty"])
        .output()
        .ok();
    let describe = output
        .as_ref()
        .and_then(|o| std::str::from_utf8(&o.stdout).ok())
        .map(str::trim)
        .unwrap_or_default();
    if !describe.is_empty() {
        println!("cargo:rustc-env=_GIT_INFO={describe}");
    }
}
