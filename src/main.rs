use std::io;
use std::process::ExitCode;

use bitseq::BinarySequenceGenerator;
use bitseq::logger::configure_logger;

fn main() -> ExitCode {
    configure_logger();

    let mut generator = BinarySequenceGenerator::new();
    let result = bitseq::run(&mut generator, &mut io::stdout().lock());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match std::error::Error::source(&err) {
                Some(cause) => log::error!("{err}: {cause}"),
                None => log::error!("{err}"),
            }
            ExitCode::FAILURE
        }
    }
}
