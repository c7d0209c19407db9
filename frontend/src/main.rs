fn main() {
    outofoffice_frontend::run();
}
