use fob_codemod::is_identifier_name;

/// Parse and validate the wrapper type name.
///
/// The wrapper is written as a bare type reference (`FC<ButtonProps>`), so
/// it must be a single identifier.
///
/// # Examples
///
/// Valid: FC, VFC, FunctionComponent, $Component
/// Invalid: React.FC, 1FC, my-fc, ""
pub fn parse_wrapper_symbol(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Wrapper name cannot be empty".to_string());
    }

    if !is_identifier_name(s) {
        return Err(format!(
            "Wrapper name must be a plain identifier (import qualified names under an alias instead): '{}'",
            s
        ));
    }

    Ok(s.to_string())
}

/// Parse a file extension, accepting an optional leading dot.
pub fn parse_extension(s: &str) -> Result<String, String> {
    let ext = s.trim().trim_start_matches('.');

    if ext.is_empty() {
        return Err("Extension cannot be empty".to_string());
    }

    if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(format!("Extension can only contain letters and digits: '{}'", s));
    }

    Ok(ext.to_ascii_lowercase())
}

/// Parse a library root module specifier.
pub fn parse_library_root(s: &str) -> Result<String, String> {
    let root = s.trim();

    if root.is_empty() {
        return Err("Library root cannot be empty".to_string());
    }

    if root.ends_with('/') {
        return Err(format!(
            "Library root must not end with '/': '{}' (use '{}')",
            s,
            root.trim_end_matches('/')
        ));
    }

    Ok(root.to_string())
}
