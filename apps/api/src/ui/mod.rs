// Server-rendered form and tabbed result viewer.
// Markup lives in askama templates under `templates/`; askama escapes every interpolated value.

pub mod assets;
pub mod handlers;
pub mod page;
pub mod results;
