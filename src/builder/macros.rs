//! Macros for ergonomic machine construction.

/// Build a [`SymbolTable`](crate::core::SymbolTable) from `name => value` pairs.
///
/// # Example
///
/// ```
/// use reflex::symbols;
///
/// let table = symbols! {
///     "moving" => false,
///     "armed" => true,
/// };
///
/// assert_eq!(table.len(), 2);
/// assert!(table.get_symbol("armed"));
/// ```
#[macro_export]
macro_rules! symbols {
    () => {
        $crate::core::SymbolTable::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut table = $crate::core::SymbolTable::new();
        $(table.set_symbol($name, $value);)+
        table
    }};
}
