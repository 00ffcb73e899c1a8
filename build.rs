fn main() {
    println!("cargo:rerun-if-changed=proto/role_provisioning.proto");

    unsafe {
        std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path().unwrap());
    }

    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .compile_protos(&["proto/role_provisioning.proto"], &["proto"])
        .expect("failed to compile role provisioning proto");
}
