/// Row index for every position of a zigzag over `rails` rows. The
/// pattern is a pure function of length and rail count, which is what
/// makes decryption possible without storing it.
fn zigzag(len: usize, rails: usize) -> Vec<usize> {
    let mut pattern = Vec::with_capacity(len);
    let mut rail = 0;
    let mut down = true;
    for _ in 0..len {
        pattern.push(rail);
        if down {
            rail += 1;
        } else {
            rail -= 1;
        }
        if rail == rails - 1 || rail == 0 {
            down = !down;
        }
    }
    pattern
}

/// Write the text along the zigzag and read the rows top to bottom.
/// A single rail is the identity.
pub fn encrypt(text: &str, rails: usize) -> String {
    if rails <= 1 {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    let pattern = zigzag(chars.len(), rails);
    let mut fence = vec![String::new(); rails];
    for (&row, &c) in pattern.iter().zip(&chars) {
        fence[row].push(c);
    }
    fence.concat()
}

/// Recompute the zigzag for the ciphertext length, slice the ciphertext
/// into per-row segments by row occupancy, then replay the zigzag
/// consuming one character per visited row.
pub fn decrypt(text: &str, rails: usize) -> String {
    if rails <= 1 {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    let pattern = zigzag(chars.len(), rails);

    let mut counts = vec![0; rails];
    for &row in &pattern {
        counts[row] += 1;
    }

    let mut rows: Vec<&[char]> = Vec::with_capacity(rails);
    let mut offset = 0;
    for &count in &counts {
        rows.push(&chars[offset..offset + count]);
        offset += count;
    }

    let mut cursors = vec![0; rails];
    pattern
        .iter()
        .map(|&row| {
            let c = rows[row][cursors[row]];
            cursors[row] += 1;
            c
        })
        .collect()
}
