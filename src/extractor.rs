//! Route extraction from discovered controller types.
//!
//! For each discovered type this module applies the extraction contract: controller-kind
//! check, class-level URL prefix resolution, per-method mapping resolution (verbs and URLs),
//! prefix-by-URL cross product, and parameter classification. The output is a flat list of
//! [`RouteDescriptor`] values plus structured warnings; descriptors are immutable once built
//! and only live until the document is assembled.

use crate::attrs::{self, MappingAttr, MappingKind};
use crate::discovery::ApiType;
use crate::error::{Error, Result};
use log::debug;
use syn::{FnArg, Pat, Type, Visibility};

/// Framework-infrastructure parameter types, excluded from extraction entirely.
/// Matched by the declared type's last path segment, references peeled.
const INFRASTRUCTURE_TYPES: [&str; 7] = [
    "HttpRequest",
    "HttpResponse",
    "HttpSession",
    "Principal",
    "Model",
    "ModelAndView",
    "View",
];

/// File-upload parameter types, classified as `file` by declared type alone.
const FILE_TYPES: [&str; 2] = ["MultipartFile", "Part"];

/// HTTP verbs recognized by the mapping vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpVerb {
    /// Parses a verb name as written in a `method(...)` argument.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "GET" => Some(HttpVerb::Get),
            "POST" => Some(HttpVerb::Post),
            "PUT" => Some(HttpVerb::Put),
            "DELETE" => Some(HttpVerb::Delete),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
        }
    }
}

/// Classification of an extracted parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Path,
    Query,
    Body,
    Form,
    File,
}

impl ParamKind {
    /// The Swagger `in` value for this kind. The document schema has no `file` location, so
    /// file parameters map to `formData`.
    pub fn swagger_location(&self) -> &'static str {
        match self {
            ParamKind::Path => "path",
            ParamKind::Query => "query",
            ParamKind::Body => "body",
            ParamKind::Form | ParamKind::File => "formData",
        }
    }
}

/// One extracted method parameter.
#[derive(Debug, Clone)]
pub struct ParameterDescriptor {
    pub kind: ParamKind,
    /// Declared type name, informational only; no schema resolution is performed
    pub type_name: String,
    pub name: String,
    pub description: Option<String>,
}

/// One discovered (URL x mapping) route.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    /// Full URL pattern, class prefix already concatenated
    pub url: String,
    /// Allowed verbs; may be empty when a generic mapping declares no verb restriction
    pub verbs: Vec<HttpVerb>,
    /// Owning controller type name, used only for grouping
    pub controller: String,
    /// Operation summary from `#[api_operation]`, if present
    pub summary: Option<String>,
    /// First tag of the owning controller's group marker, if present
    pub tag: Option<String>,
    /// Parameters in declaration order
    pub parameters: Vec<ParameterDescriptor>,
}

/// Result of route extraction: descriptors plus structured warnings.
pub struct Extraction {
    pub routes: Vec<RouteDescriptor>,
    pub warnings: Vec<String>,
}

/// Extracts route descriptors from all discovered types.
///
/// Types that are not a recognized controller kind are silently skipped; so are non-`pub`
/// methods and methods without a mapping attribute. Malformed attribute arguments and the
/// defensive unsupported-mapping condition are fatal.
pub fn extract_routes(api_types: &[ApiType]) -> Result<Extraction> {
    let mut routes = Vec::new();
    let mut warnings = Vec::new();

    for api_type in api_types {
        if !is_controller(api_type) {
            debug!(
                "{} carries the group marker but is not a controller, skipping",
                api_type.name
            );
            continue;
        }

        debug!("{} is a controller", api_type.name);
        extract_controller(api_type, &mut routes, &mut warnings)?;
    }

    Ok(Extraction { routes, warnings })
}

/// A type is a controller when it carries one of the two recognized markers.
fn is_controller(api_type: &ApiType) -> bool {
    attrs::has_attr(&api_type.attrs, attrs::REST_CONTROLLER)
        || attrs::has_attr(&api_type.attrs, attrs::CONTROLLER)
}

fn extract_controller(
    api_type: &ApiType,
    routes: &mut Vec<RouteDescriptor>,
    warnings: &mut Vec<String>,
) -> Result<()> {
    // Class-level URL prefix list. An absent annotation means routes are simply unprefixed.
    let url_prefixes: Option<Vec<String>> = match attrs::find_attr(&api_type.attrs, "request_mapping")
    {
        Some(attr) => Some(parse_mapping(attr, api_type, "<struct>")?.prefixes()),
        None => None,
    };

    for method in &api_type.methods {
        if !matches!(method.vis, Visibility::Public(_)) {
            continue;
        }

        let method_name = method.sig.ident.to_string();

        if !attrs::has_mapping_attr(&method.attrs) {
            // Not a route handler
            continue;
        }

        // Membership test passed, so one of the five resolvers must match. The None arm is
        // defensive dead code.
        let Some(mapping_attr) = attrs::find_mapping(&method.attrs) else {
            return Err(Error::UnsupportedMapping {
                controller: api_type.name.clone(),
                method: method_name,
            });
        };

        let mapping = parse_mapping(mapping_attr, api_type, &method_name)?;
        let verbs = resolve_verbs(&mapping, api_type, &method_name, warnings);
        let urls = mapping.urls();

        let summary = match attrs::find_attr(&method.attrs, attrs::API_OPERATION) {
            Some(attr) => Some(string_arg(attr, api_type, &method_name)?),
            None => None,
        };
        let tag = api_type.tags.first().cloned();
        let parameters = extract_parameters(method, api_type, &method_name)?;

        debug!(
            "Extracted {} parameter(s) for {}::{}",
            parameters.len(),
            api_type.name,
            method_name
        );

        let mut push_route = |url: String| {
            routes.push(RouteDescriptor {
                url,
                verbs: verbs.clone(),
                controller: api_type.name.clone(),
                summary: summary.clone(),
                tag: tag.clone(),
                parameters: parameters.clone(),
            });
        };

        match &url_prefixes {
            Some(prefixes) => {
                // Cross product: N prefixes x M urls, plain string concatenation
                for prefix in prefixes {
                    for url in &urls {
                        push_route(format!("{}{}", prefix, url));
                    }
                }
            }
            None => {
                for url in &urls {
                    push_route(url.clone());
                }
            }
        }
    }

    Ok(())
}

/// Resolves the verb list of a mapping. Shorthand mappings carry a fixed verb; the generic
/// mapping uses its declared list as-is, which may be empty.
fn resolve_verbs(
    mapping: &MappingAttr,
    api_type: &ApiType,
    method_name: &str,
    warnings: &mut Vec<String>,
) -> Vec<HttpVerb> {
    if let Some(fixed) = mapping.kind.fixed_verb() {
        // fixed_verb only emits names from HttpVerb's own vocabulary
        return vec![HttpVerb::from_name(fixed).unwrap_or(HttpVerb::Get)];
    }

    let mut verbs = Vec::new();
    for name in &mapping.methods {
        match HttpVerb::from_name(name) {
            Some(verb) => verbs.push(verb),
            None => warnings.push(format!(
                "{}::{} declares unknown HTTP verb `{}`, ignored",
                api_type.name, method_name, name
            )),
        }
    }

    if mapping.kind == MappingKind::Request && verbs.is_empty() {
        warnings.push(format!(
            "{}::{} declares no HTTP verb restriction; its path is registered without operations",
            api_type.name, method_name
        ));
    }

    verbs
}

/// Extracts parameter descriptors from a method signature, in declaration order.
///
/// Classification priority: path variable > request body > file type > request param > form.
/// Framework-infrastructure types are skipped entirely. The description comes from the
/// method-level `#[api_param]` attribute and is applied to every parameter of the method.
fn extract_parameters(
    method: &syn::ImplItemFn,
    api_type: &ApiType,
    method_name: &str,
) -> Result<Vec<ParameterDescriptor>> {
    let description = match attrs::find_attr(&method.attrs, attrs::API_PARAM) {
        Some(attr) => Some(string_arg(attr, api_type, method_name)?),
        None => None,
    };

    let mut parameters = Vec::new();

    for (index, input) in method.sig.inputs.iter().enumerate() {
        let FnArg::Typed(pat_type) = input else {
            // self receiver
            continue;
        };

        let type_name = declared_type_name(&pat_type.ty);
        if INFRASTRUCTURE_TYPES.contains(&type_name.as_str()) {
            continue;
        }

        let kind = if attrs::has_attr(&pat_type.attrs, attrs::PATH_VARIABLE) {
            ParamKind::Path
        } else if attrs::has_attr(&pat_type.attrs, attrs::REQUEST_BODY) {
            ParamKind::Body
        } else if FILE_TYPES.contains(&type_name.as_str()) {
            ParamKind::File
        } else if attrs::has_attr(&pat_type.attrs, attrs::REQUEST_PARAM) {
            ParamKind::Query
        } else {
            ParamKind::Form
        };

        let name = match pat_type.pat.as_ref() {
            Pat::Ident(pat_ident) => pat_ident.ident.to_string(),
            _ => format!("arg{}", index),
        };

        parameters.push(ParameterDescriptor {
            kind,
            type_name,
            name,
            description: description.clone(),
        });
    }

    Ok(parameters)
}

/// The declared type's name: last path segment, references and parentheses peeled.
fn declared_type_name(ty: &Type) -> String {
    match ty {
        Type::Reference(reference) => declared_type_name(&reference.elem),
        Type::Paren(paren) => declared_type_name(&paren.elem),
        Type::Group(group) => declared_type_name(&group.elem),
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
        _ => "unknown".to_string(),
    }
}

fn parse_mapping(
    attr: &syn::Attribute,
    api_type: &ApiType,
    method_name: &str,
) -> Result<MappingAttr> {
    MappingAttr::parse(attr).map_err(|e| Error::ParseError {
        file: std::path::PathBuf::from(format!("{}::{}", api_type.name, method_name)),
        message: e.to_string(),
    })
}

fn string_arg(attr: &syn::Attribute, api_type: &ApiType, method_name: &str) -> Result<String> {
    attrs::string_value(attr).map_err(|e| Error::ParseError {
        file: std::path::PathBuf::from(format!("{}::{}", api_type.name, method_name)),
        message: e.to_string(),
    })
}
