use graft::app::cli;

fn main() {
    cli::run();
}
