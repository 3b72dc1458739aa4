use pairwise_aligner::{align, AlignmentMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut mode = AlignmentMode::Global;
    let mut sequences = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-l" => mode = AlignmentMode::Local,
            _ => sequences.push(arg),
        }
    }

    match sequences.as_slice() {
        [] => {
            // Demo pairs: one RNA, one DNA.
            run(("UACGAUGAGAUU", "UAAAAACGAUGAGAAU"), mode)?;
            println!();
            run(("TACGAGGATA", "TACGATGATA"), mode)?;
        }
        [s1, s2] => run((s1.as_str(), s2.as_str()), mode)?,
        _ => {
            eprintln!("usage: pairwise_aligner [-l] [SEQ1 SEQ2]");
            std::process::exit(2);
        }
    }

    Ok(())
}

fn run(
    (seq1, seq2): (&str, &str),
    mode: AlignmentMode,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = align(seq1, seq2, mode)?;
    println!("s1: {}", seq1);
    println!("s2: {}", seq2);
    println!("Alignment:");
    println!("{}", result);
    Ok(())
}
