fn main() {
    tt_badger::app::cli::run();
}
