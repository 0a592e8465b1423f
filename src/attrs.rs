//! Recognized attribute vocabulary and its argument grammar.
//!
//! The scanned project marks its controllers with a fixed set of structural attributes
//! (`#[api_group]`, `#[rest_controller]`, `#[request_mapping]`, verb shorthands, parameter
//! markers). This module is the strategy table mapping each recognized marker onto its parsed
//! form; everything downstream dispatches on [`MappingKind`] instead of re-inspecting raw
//! attribute tokens.
//!
//! The attributes only have to parse, never compile: the tool reads the project's source with
//! `syn` and never touches the compiled crate.

use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{parenthesized, Attribute, Ident, LitStr, Meta, Token};

/// Group marker attribute: only types carrying it are discovered.
pub const API_GROUP: &str = "api_group";
/// Controller-kind markers. A group-annotated type without either is excluded.
pub const REST_CONTROLLER: &str = "rest_controller";
pub const CONTROLLER: &str = "controller";
/// Method-level operation summary.
pub const API_OPERATION: &str = "api_operation";
/// Method-level parameter description.
pub const API_PARAM: &str = "api_param";
/// Parameter classification markers.
pub const PATH_VARIABLE: &str = "path_variable";
pub const REQUEST_BODY: &str = "request_body";
pub const REQUEST_PARAM: &str = "request_param";

/// The recognized mapping attributes: the generic `request_mapping` plus the four
/// verb-specific shorthands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingKind {
    /// `#[request_mapping(...)]` - verb list taken from its `method(...)` argument
    Request,
    /// `#[get_mapping(...)]`
    Get,
    /// `#[post_mapping(...)]`
    Post,
    /// `#[put_mapping(...)]`
    Put,
    /// `#[delete_mapping(...)]`
    Delete,
}

impl MappingKind {
    /// Maps an attribute name onto its mapping kind, if recognized.
    pub fn from_attr_name(name: &str) -> Option<Self> {
        match name {
            "request_mapping" => Some(MappingKind::Request),
            "get_mapping" => Some(MappingKind::Get),
            "post_mapping" => Some(MappingKind::Post),
            "put_mapping" => Some(MappingKind::Put),
            "delete_mapping" => Some(MappingKind::Delete),
            _ => None,
        }
    }

    /// The fixed verb name of a shorthand mapping. `Request` carries its own verb list.
    pub fn fixed_verb(&self) -> Option<&'static str> {
        match self {
            MappingKind::Request => None,
            MappingKind::Get => Some("GET"),
            MappingKind::Post => Some("POST"),
            MappingKind::Put => Some("PUT"),
            MappingKind::Delete => Some("DELETE"),
        }
    }
}

/// A parsed mapping attribute.
///
/// Grammar, mirroring the annotation it models:
/// - bare string literals or `value("/a", "/b")` populate the primary URL array
/// - `path("/a")` populates the alternate URL array, consulted when the primary one is empty
/// - `method(GET, POST)` populates the verb list (generic mapping only; raw verb names are
///   kept as strings and validated by the extractor)
#[derive(Debug, Clone)]
pub struct MappingAttr {
    pub kind: MappingKind,
    values: Vec<String>,
    paths: Vec<String>,
    pub methods: Vec<String>,
}

impl MappingAttr {
    /// Parses a mapping attribute. The caller has already established that the attribute name
    /// is one of the recognized mapping names.
    pub fn parse(attr: &Attribute) -> syn::Result<Self> {
        let name = attr_name(attr);
        let kind = MappingKind::from_attr_name(&name).ok_or_else(|| {
            syn::Error::new_spanned(attr, format!("`{}` is not a mapping attribute", name))
        })?;

        let mut mapping = MappingAttr {
            kind,
            values: Vec::new(),
            paths: Vec::new(),
            methods: Vec::new(),
        };

        match &attr.meta {
            // `#[get_mapping]` without arguments: both URL arrays stay empty
            Meta::Path(_) => {}
            Meta::List(_) => {
                let args =
                    attr.parse_args_with(Punctuated::<MappingArg, Token![,]>::parse_terminated)?;
                for arg in args {
                    match arg {
                        MappingArg::Url(url) => mapping.values.push(url),
                        MappingArg::Value(urls) => mapping.values.extend(urls),
                        MappingArg::Path(urls) => mapping.paths.extend(urls),
                        MappingArg::Method(verbs) => mapping.methods.extend(verbs),
                    }
                }
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    format!("`{}` does not take a name-value form", name),
                ));
            }
        }

        Ok(mapping)
    }

    /// Resolves the method-level URL list: the primary array, falling back to the alternate
    /// `path` array, falling back to a single empty-string URL segment.
    pub fn urls(&self) -> Vec<String> {
        let urls = self.url_arrays();
        if urls.is_empty() {
            vec![String::new()]
        } else {
            urls
        }
    }

    /// Resolves the class-level prefix list: the primary array, falling back to the alternate
    /// `path` array. No empty-string fallback here; an empty prefix list fans out to zero
    /// routes, matching the cross-product contract.
    pub fn prefixes(&self) -> Vec<String> {
        self.url_arrays()
    }

    fn url_arrays(&self) -> Vec<String> {
        if !self.values.is_empty() {
            self.values.clone()
        } else {
            self.paths.clone()
        }
    }
}

enum MappingArg {
    Url(String),
    Value(Vec<String>),
    Path(Vec<String>),
    Method(Vec<String>),
}

impl Parse for MappingArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(LitStr) {
            let lit: LitStr = input.parse()?;
            return Ok(MappingArg::Url(lit.value()));
        }

        let ident: Ident = input.parse()?;
        let content;
        parenthesized!(content in input);

        match ident.to_string().as_str() {
            "value" => Ok(MappingArg::Value(parse_string_list(&content)?)),
            "path" => Ok(MappingArg::Path(parse_string_list(&content)?)),
            "method" => Ok(MappingArg::Method(parse_ident_list(&content)?)),
            other => Err(syn::Error::new(
                ident.span(),
                format!("unrecognized mapping argument `{}`", other),
            )),
        }
    }
}

fn parse_string_list(input: ParseStream) -> syn::Result<Vec<String>> {
    let items = Punctuated::<LitStr, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().map(|lit| lit.value()).collect())
}

fn parse_ident_list(input: ParseStream) -> syn::Result<Vec<String>> {
    let items = Punctuated::<Ident, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().map(|ident| ident.to_string()).collect())
}

/// Returns the last path segment of an attribute name (`foo::bar_mapping` -> `bar_mapping`).
pub fn attr_name(attr: &Attribute) -> String {
    attr.path()
        .segments
        .last()
        .map(|segment| segment.ident.to_string())
        .unwrap_or_default()
}

/// Checks whether any attribute with the given name is present.
pub fn has_attr(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr_name(attr) == name)
}

/// Finds the first attribute with the given name.
pub fn find_attr<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|attr| attr_name(attr) == name)
}

/// Whether the attribute set contains any recognized mapping attribute. This is the handler
/// membership test: a method lacking all five mapping attributes is not a route.
pub fn has_mapping_attr(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .any(|attr| MappingKind::from_attr_name(&attr_name(attr)).is_some())
}

/// Finds the mapping attribute to extract from, in fixed priority order: the generic
/// `request_mapping` first, then the verb shorthands.
pub fn find_mapping(attrs: &[Attribute]) -> Option<&Attribute> {
    const PRIORITY: [&str; 5] = [
        "request_mapping",
        "get_mapping",
        "post_mapping",
        "put_mapping",
        "delete_mapping",
    ];

    for name in PRIORITY {
        if let Some(attr) = find_attr(attrs, name) {
            return Some(attr);
        }
    }
    None
}

/// Reads the single string argument of `#[api_operation("...")]` / `#[api_param("...")]`.
pub fn string_value(attr: &Attribute) -> syn::Result<String> {
    let lit: LitStr = attr.parse_args()?;
    Ok(lit.value())
}

/// Reads the tag list of `#[api_group(tags("a", "b"))]`. Bare string literals are accepted as
/// tags too. A marker without arguments yields an empty tag list.
pub fn group_tags(attr: &Attribute) -> syn::Result<Vec<String>> {
    let mut tags = Vec::new();

    match &attr.meta {
        Meta::Path(_) => {}
        Meta::List(_) => {
            let args = attr.parse_args_with(Punctuated::<GroupArg, Token![,]>::parse_terminated)?;
            for arg in args {
                match arg {
                    GroupArg::Tag(tag) => tags.push(tag),
                    GroupArg::Tags(list) => tags.extend(list),
                }
            }
        }
        Meta::NameValue(nv) => {
            return Err(syn::Error::new_spanned(
                nv,
                "`api_group` does not take a name-value form",
            ));
        }
    }

    Ok(tags)
}

enum GroupArg {
    Tag(String),
    Tags(Vec<String>),
}

impl Parse for GroupArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(LitStr) {
            let lit: LitStr = input.parse()?;
            return Ok(GroupArg::Tag(lit.value()));
        }

        let ident: Ident = input.parse()?;
        let content;
        parenthesized!(content in input);

        match ident.to_string().as_str() {
            "tags" => Ok(GroupArg::Tags(parse_string_list(&content)?)),
            other => Err(syn::Error::new(
                ident.span(),
                format!("unrecognized api_group argument `{}`", other),
            )),
        }
    }
}
