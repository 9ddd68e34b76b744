fn main() {
    playrun::app::cli::run();
}
