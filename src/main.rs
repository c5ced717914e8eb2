fn main() {
    hackhub_landing::run();
}
