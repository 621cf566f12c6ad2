//! Colour-coded console logging.

#[macro_export]
macro_rules! yay {
    ($($arg:tt)*) => {
        println!("{}[+] {}{}", better_term::Color::Green, format_args!($($arg)*), better_term::Color::White)
    };
}

#[macro_export]
macro_rules! say {
    ($($arg:tt)*) => {
        println!("{}[*] {}", better_term::Color::White, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! hey {
    ($($arg:tt)*) => {
        println!("{}[?] {}{}", better_term::Color::Yellow, format_args!($($arg)*), better_term::Color::White)
    };
}

#[macro_export]
macro_rules! nay {
    ($($arg:tt)*) => {
        eprintln!("{}[!] {}{}", better_term::Color::Red, format_args!($($arg)*), better_term::Color::White)
    };
}
