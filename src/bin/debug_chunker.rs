use polysyl_rs::{Chunker, ThaiString};

fn main() {
    let input = "โครงการพัฒนา 2567 ของชุมชน (sustainability) ดีมาก!";
    println!("Input: {}", input);

    let chunker = Chunker::new(input);
    let chunks = chunker.make_chunks();

    println!("\nChunks:");
    for (i, chunk) in chunks.iter().enumerate() {
        println!(
            "  {}: {:?} - chars: {}..{}, type: {:?}",
            i,
            chunk.text(input),
            chunk.char_start,
            chunk.char_start + chunk.char_len,
            chunk.chunk_type
        );
    }

    let thai = ThaiString::new("โครงการพัฒนา");
    let mut clusters = Vec::new();
    let mut i = 0;
    while i < thai.len() {
        let n = thai.cluster_len(i);
        clusters.push(thai.chars[i..i + n].iter().collect::<String>());
        i += n;
    }
    println!("\nClusters of {}: {:?}", thai.string, clusters);

    let thai_chunks: Vec<_> = chunks
        .iter()
        .filter(|c| c.chunk_type == polysyl_rs::ChunkType::Thai)
        .collect();
    println!("\nThai chunks count: {}", thai_chunks.len());
}
