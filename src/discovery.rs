//! Annotated-type discovery.
//!
//! Given the parsed source files and a scan-package prefix (a module path such as
//! `crate::controllers`), discovery collects every struct carrying the `#[api_group]` marker
//! whose module path falls under the prefix, then attaches the methods of its inherent `impl`
//! blocks from any scanned file. An empty result is not an error; a package with nothing
//! annotated simply produces an empty document.

use crate::attrs;
use crate::error::{Error, Result};
use crate::parser::ParsedFile;
use log::debug;
use syn::{ImplItem, Item, Type};

/// A discovered API type: a group-annotated struct plus its inherent methods.
#[derive(Debug)]
pub struct ApiType {
    /// The struct name
    pub name: String,
    /// Module path of the file defining the struct
    pub module_path: String,
    /// Tag list from the `#[api_group]` marker
    pub tags: Vec<String>,
    /// All struct-level attributes (controller markers, class-level mapping)
    pub attrs: Vec<syn::Attribute>,
    /// Methods collected from inherent `impl` blocks, in declaration order
    pub methods: Vec<syn::ImplItemFn>,
}

/// Finds all group-annotated types under the given scan package.
///
/// Two passes: the first collects annotated structs, the second attaches `impl`-block methods.
/// Impl blocks are matched by type name across all scanned files, so a controller's methods may
/// live in a different file than its struct.
///
/// # Errors
///
/// Returns an error if the scan package is empty or a recognized attribute has malformed
/// arguments.
pub fn find_api_types(parsed_files: &[ParsedFile], scan_package: &str) -> Result<Vec<ApiType>> {
    if scan_package.is_empty() {
        return Err(Error::InvalidArgument(
            "scan package must not be empty".to_string(),
        ));
    }

    let mut api_types = Vec::new();

    for file in parsed_files {
        collect_structs(
            &file.syntax_tree.items,
            &file.module_path,
            scan_package,
            file,
            &mut api_types,
        )?;
    }

    for file in parsed_files {
        collect_impls(&file.syntax_tree.items, &mut api_types);
    }

    debug!(
        "Discovered {} annotated types under {}",
        api_types.len(),
        scan_package
    );

    Ok(api_types)
}

/// Whether a module path lies within the scan package (the package itself or a sub-module).
fn module_matches(module_path: &str, scan_package: &str) -> bool {
    module_path == scan_package || module_path.starts_with(&format!("{}::", scan_package))
}

fn collect_structs(
    items: &[Item],
    module_path: &str,
    scan_package: &str,
    file: &ParsedFile,
    out: &mut Vec<ApiType>,
) -> Result<()> {
    for item in items {
        match item {
            Item::Struct(item_struct) => {
                if !module_matches(module_path, scan_package) {
                    continue;
                }
                let Some(group) = attrs::find_attr(&item_struct.attrs, attrs::API_GROUP) else {
                    continue;
                };

                let tags = attrs::group_tags(group).map_err(|e| Error::ParseError {
                    file: file.path.clone(),
                    message: e.to_string(),
                })?;

                debug!("Discovered annotated type {}::{}", module_path, item_struct.ident);

                out.push(ApiType {
                    name: item_struct.ident.to_string(),
                    module_path: module_path.to_string(),
                    tags,
                    attrs: item_struct.attrs.clone(),
                    methods: Vec::new(),
                });
            }
            Item::Mod(item_mod) => {
                if let Some((_, nested)) = &item_mod.content {
                    let nested_path = format!("{}::{}", module_path, item_mod.ident);
                    collect_structs(nested, &nested_path, scan_package, file, out)?;
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn collect_impls(items: &[Item], api_types: &mut [ApiType]) {
    for item in items {
        match item {
            // Inherent impls only; trait impls never carry route mappings
            Item::Impl(item_impl) if item_impl.trait_.is_none() => {
                let Some(type_name) = self_type_name(&item_impl.self_ty) else {
                    continue;
                };

                if let Some(api_type) = api_types.iter_mut().find(|t| t.name == type_name) {
                    for impl_item in &item_impl.items {
                        if let ImplItem::Fn(method) = impl_item {
                            api_type.methods.push(method.clone());
                        }
                    }
                }
            }
            Item::Mod(item_mod) => {
                if let Some((_, nested)) = &item_mod.content {
                    collect_impls(nested, api_types);
                }
            }
            _ => {}
        }
    }
}

/// The name of the type an impl block belongs to (last path segment).
fn self_type_name(ty: &Type) -> Option<String> {
    if let Type::Path(type_path) = ty {
        type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string())
    } else {
        None
    }
}
