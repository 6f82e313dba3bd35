fn main() {
    codefolio_lib::run()
}
