/// Fixed name of the settings dump in the working directory.
/// Written by an external dump step; one record per line,
/// `<schema> <key> <value...>`.
pub const DUMP_FILE: &str = "gsettings_output.txt";
