/// Rearranges `rows` in place so that every row with
/// `value(row) >= threshold` comes before the others.
/// Returns the length of that prefix.
pub(super) fn partition<F>(rows: &mut [usize], threshold: f64, value: F) -> usize
    where F: Fn(usize) -> f64,
{
    let mut front = 0;
    let mut back = rows.len();
    loop {
        while front < back && value(rows[front]) >= threshold {
            front += 1;
        }
        while front < back && value(rows[back - 1]) < threshold {
            back -= 1;
        }
        if front >= back {
            break;
        }
        rows.swap(front, back - 1);
        front += 1;
        back -= 1;
    }
    front
}


#[cfg(test)]
mod tests {
    use super::*;

    fn check(values: &[f64], threshold: f64) {
        let mut rows = (0..values.len()).collect::<Vec<_>>();
        let k = partition(&mut rows[..], threshold, |i| values[i]);

        assert_eq!(k, values.iter().filter(|&&x| x >= threshold).count());
        assert!(rows[..k].iter().all(|&i| values[i] >= threshold));
        assert!(rows[k..].iter().all(|&i| values[i] < threshold));

        let mut sorted = rows.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..values.len()).collect::<Vec<_>>());
    }


    #[test]
    fn splits_mixed_block() {
        check(&[1.0, 9.0, 2.0, 8.0, 5.0, 5.0, 0.0], 5.0);
        check(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0], 3.5);
    }


    #[test]
    fn handles_one_sided_blocks() {
        check(&[], 1.0);
        check(&[2.0, 3.0, 4.0], 1.0);
        check(&[2.0, 3.0, 4.0], 10.0);
        check(&[1.0], 1.0);
    }
}
