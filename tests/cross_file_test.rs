//! Controllers whose struct and impl blocks live in different files.

use swagger_from_source::{
    generator,
    metadata::ProjectMetadata,
};
use tempfile::TempDir;

fn create_test_project(files: Vec<(&str, &str)>) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    for (path, content) in files {
        let file_path = temp_dir.path().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&file_path, content).expect("Failed to write test file");
    }

    temp_dir
}

fn metadata() -> ProjectMetadata {
    ProjectMetadata {
        name: "split".to_string(),
        description: None,
        licenses: Vec::new(),
    }
}

#[test]
fn test_impl_block_in_separate_file() {
    let struct_file = r#"
        #[api_group(tags("orders"))]
        #[rest_controller]
        #[request_mapping("/orders")]
        pub struct OrderController;
    "#;
    let impl_file = r#"
        use crate::controllers::OrderController;

        impl OrderController {
            #[get_mapping("/list")]
            pub fn list(&self) {}

            #[post_mapping]
            pub fn create(&self, #[request_body] order: OrderForm) {}
        }
    "#;

    let temp_dir = create_test_project(vec![
        ("src/controllers/mod.rs", struct_file),
        ("src/handlers/orders.rs", impl_file),
    ]);

    let report =
        generator::generate(temp_dir.path(), "crate", &metadata()).expect("generation failed");
    let document = report.document;

    assert!(document.paths.contains_key("/orders/list"));
    // Empty-URL shorthand falls back to the class prefix alone
    let bare = document.paths.get("/orders").expect("missing /orders");
    assert!(bare.post.is_some());
    assert_eq!(bare.parameters.len(), 1);
    assert_eq!(bare.parameters[0].location, "body");
}

#[test]
fn test_struct_outside_scan_package_keeps_impl_invisible() {
    let struct_file = r#"
        #[api_group(tags("hidden"))]
        #[rest_controller]
        pub struct HiddenController;
    "#;
    let impl_file = r#"
        impl HiddenController {
            #[get_mapping("/hidden")]
            pub fn hidden(&self) {}
        }
    "#;

    let temp_dir = create_test_project(vec![
        ("src/internal/hidden.rs", struct_file),
        ("src/controllers/hidden_impl.rs", impl_file),
    ]);

    let report = generator::generate(temp_dir.path(), "crate::controllers", &metadata())
        .expect("generation failed");

    // Discovery keys off the struct's module path, not the impl's
    assert!(report.document.paths.is_empty());
}
