use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::GridError;
use crate::grid::Grid;
use crate::lexicon::Lexicon;

/// Parses a letter bag such as `"ielebtaemltnvaaoalpse"` into letters.
///
/// Alphabetic characters are lowercased and kept in order. Whitespace is
/// ignored, so `"c a t"` and `"cat"` are the same bag.
///
/// # Returns
/// * `Ok(Vec<char>)` with the letters in input order.
/// * `Err(GridError::InvalidLetter)` for the first character that is neither
///   alphabetic nor whitespace.
///
/// # Examples
/// ```
/// use wordgrid_solver::utils::letters_from_str;
///
/// assert_eq!(letters_from_str("Ca t").unwrap(), vec!['c', 'a', 't']);
/// assert!(letters_from_str("ca7").is_err());
/// ```
pub fn letters_from_str(s: &str) -> Result<Vec<char>, GridError> {
    let mut letters = Vec::with_capacity(s.len());
    for (position, ch) in s.chars().enumerate() {
        if ch.is_whitespace() {
            continue;
        }
        if !ch.is_alphabetic() {
            return Err(GridError::InvalidLetter { ch, position });
        }
        letters.extend(ch.to_lowercase());
    }
    Ok(letters)
}

/// Parses rows of text into a `Grid`, mostly for tests and fixtures.
///
/// Row `i` becomes `y = i` and character `j` becomes `x = j`. A `.` or a
/// space marks an unoccupied cell; alphabetic characters are lowercased and
/// placed. Rows may have different lengths.
///
/// # Returns
/// * `Ok(Grid)` if every character is a letter, `.` or a space.
/// * `Err(GridError::InvalidLetter)` otherwise, with `position` counting
///   characters across all rows.
///
/// # Examples
/// ```
/// use wordgrid_solver::utils::grid_from_rows;
///
/// let grid = grid_from_rows(&[
///     "cat",
///     ".r.",
/// ]).unwrap();
/// assert_eq!(grid.get(1, 1), Some('r'));
/// assert_eq!(grid.get(0, 1), None);
/// assert!(grid_from_rows(&["c#t"]).is_err());
/// ```
pub fn grid_from_rows(rows: &[&str]) -> Result<Grid, GridError> {
    let mut grid = Grid::new();
    let mut position = 0;
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            match ch {
                '.' | ' ' => {}
                c if c.is_alphabetic() => {
                    let letter = c.to_lowercase().next().unwrap_or(c);
                    grid.set(x as i32, y as i32, letter);
                }
                _ => return Err(GridError::InvalidLetter { ch, position }),
            }
            position += 1;
        }
    }
    Ok(grid)
}

/// Reads a word list file (one word per line) into a `Lexicon`.
///
/// See [`Lexicon::from_reader`] for which entries are kept.
pub fn load_lexicon<P: AsRef<Path>>(path: P) -> Result<Lexicon, GridError> {
    let file = File::open(path.as_ref())?;
    Lexicon::from_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_letters_from_str_valid() {
        let letters = letters_from_str("ielebtaemltnvaaoalpse").unwrap();
        assert_eq!(letters.len(), 21);
        assert_eq!(letters[0], 'i');
        assert_eq!(letters[20], 'e');
    }

    #[test]
    fn test_letters_from_str_invalid_char() {
        let result = letters_from_str("ab-c");
        assert!(matches!(
            result,
            Err(GridError::InvalidLetter { ch: '-', position: 2 })
        ));
    }

    #[test]
    fn test_letters_from_str_empty() {
        assert!(letters_from_str("   ").unwrap().is_empty());
    }

    #[test]
    fn test_grid_from_rows_ragged() {
        let grid = grid_from_rows(&["C", "..A", "", " t"]).unwrap();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.get(0, 0), Some('c'));
        assert_eq!(grid.get(2, 1), Some('a'));
        assert_eq!(grid.get(1, 3), Some('t'));
    }

    #[test]
    fn test_grid_from_rows_invalid_char() {
        let result = grid_from_rows(&["ab", "c1"]);
        assert!(matches!(
            result,
            Err(GridError::InvalidLetter { ch: '1', position: 3 })
        ));
    }

    #[test]
    fn test_grid_from_rows_empty_input() {
        let rows: [&str; 0] = [];
        assert!(grid_from_rows(&rows).unwrap().is_empty());
    }

    #[test]
    fn test_load_lexicon_from_file() {
        let path = std::env::temp_dir().join(format!("wordgrid_words_{}.txt", std::process::id()));
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "Cat\nq\ncar's\nart").unwrap();
        }
        let lexicon = load_lexicon(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("cat"));
        assert!(lexicon.contains("art"));
    }

    #[test]
    fn test_load_lexicon_missing_file() {
        let result = load_lexicon("/no/such/word/list.txt");
        assert!(matches!(result, Err(GridError::Io(_))));
    }
}
