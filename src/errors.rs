// Create the Error, ErrorKind, ResultExt, and Result types.
// Modules that write items `use errors::*;` to get `?` conversions from the
// foreign error types and the `chain_err` method.
use error_chain::*;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
        TemplateParse(::handlebars::TemplateError);
        TemplateRender(::handlebars::RenderError);
    }
}
