//! Records shared between the scan passes.

/// One entry of the `applib` registration table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFunction {
    /// C-side name, e.g. `applib_msgbox`.
    pub internal: String,
    /// Name exposed to plugins, e.g. `msgbox`.
    pub exposed: String,
}

/// A function declaration ready for emission.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FunctionStub {
    pub exposed: String,
    /// Doc-comment lines, already rewritten with the `---` prefix.
    pub comments: Vec<String>,
    /// Parameter names in documented order.
    pub params: Vec<String>,
}
