use imghdr::registry::SIGNATURES;

fn main() {
    println!("Signatures in order of priority:");
    for (i, signature) in SIGNATURES.iter().enumerate() {
        let marker = match signature.marker() {
            Some(marker) => format!(" (requires {:?})", String::from_utf8_lossy(marker)),
            None => String::new(),
        };

        println!(
            " {i}. {:<8}{}{marker}",
            signature.format().name(),
            hex::encode_upper(signature.magic()),
        );
    }
}
