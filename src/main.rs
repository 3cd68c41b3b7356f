fn main() {
    fontbrew::run_cli();
}
