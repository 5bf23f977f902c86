use std::process::ExitCode;

use voxel_shape_gen::application::{self, failure_message, RunParams};

fn main() -> ExitCode {
    #[cfg(feature = "log")]
    env_logger::init();

    let result = RunParams::from_args(std::env::args().skip(1))
        .and_then(|params| application::run(&params));

    match result {
        Ok(shapes) => {
            for shape in shapes {
                println!("{}", shape);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}
