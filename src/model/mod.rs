pub mod catalogue;
pub mod converter;
pub mod markup;
pub mod placeholder;
pub mod rewriter;
pub mod site;
pub mod transform;
