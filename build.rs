fn main() {
    println!("cargo:rerun-if-changed=proto/hotstorage_model.proto");
    protobuf_codegen_pure::Codegen::new()
        .out_dir("src/hotstorage")
        .inputs(&["proto/hotstorage_model.proto"])
        .include("proto")
        .run()
        .expect("protoc");
}
