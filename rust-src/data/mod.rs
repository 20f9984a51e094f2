//! Backup files and the built-in widget library.

mod backup;
mod templates;

#[allow(unused_imports)]
pub use backup::{
    backup_file_name,
    parse_import,
    read_import,
    ExportDocument,
    ImportError,
    ImportedBackup,
};
#[allow(unused_imports)]
pub use templates::{
    default_data,
    find_template,
    sample_dashboard,
    templates,
    TemplateCategory,
    WidgetTemplate,
};
