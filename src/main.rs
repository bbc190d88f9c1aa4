fn main() {
    if let Err(e) = soundspeed_rs::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
