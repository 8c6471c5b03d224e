// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_manuscript(pages: usize) -> String {
    let body = "$h2>Rozdział\n$>Był €ciepły€ wieczór i w domu panowała cisza.\nA potem ktoś zapukał do drzwi.\n$cyt>$>„Kto tam?” – zapytała.\n$t4>$>koniec";
    (1..=pages)
        .map(|n| format!("Str{n}\n{body}"))
        .collect::<Vec<_>>()
        .join("\n")
}
