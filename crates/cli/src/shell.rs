//! Shell-style word splitting for forwarded argument strings.
//!
//! Action inputs arrive as single strings (`args`, file lists) that may
//! carry quoting. Splitting happens here rather than through `sh -c`, so
//! no shell ever interprets user input.

/// Split `input` into words, honoring single quotes, double quotes, and
/// backslash escapes. Quote characters are stripped from the result.
pub fn split(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut in_single = false;
    let mut in_double = false;
    let mut escaped = false;

    for c in input.chars() {
        if escaped {
            current.push(c);
            escaped = false;
            continue;
        }

        match c {
            '\\' if !in_single => {
                escaped = true;
                in_word = true;
            }
            '\'' if !in_double => {
                in_single = !in_single;
                in_word = true;
            }
            '"' if !in_single => {
                in_double = !in_double;
                in_word = true;
            }
            c if c.is_whitespace() && !in_single && !in_double => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_word {
        words.push(current);
    }
    words
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
