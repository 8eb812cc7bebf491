use std::path::Path;

use cubewalk::{Options, Viewer};

/// Options file looked up next to the working directory.
const OPTIONS_PATH: &str = "cubewalk.toml";

fn main() {
    env_logger::init();

    let options_path = Path::new(OPTIONS_PATH);
    let options = if options_path.exists() {
        match Options::load(options_path) {
            Ok(options) => {
                log::info!("loaded options from {OPTIONS_PATH}");
                options
            }
            Err(err) => {
                log::error!("failed to load {OPTIONS_PATH}: {err}");
                std::process::exit(1);
            }
        }
    } else {
        Options::default()
    };

    if let Err(err) = Viewer::builder().with_options(options).build().run()
    {
        log::error!("{err}");
        std::process::exit(1);
    }
}
