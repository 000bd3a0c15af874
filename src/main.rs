fn main() {
    set_property::app::cli::run();
}
