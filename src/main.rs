fn main() {
    vhostgen::app::cli::run();
}
