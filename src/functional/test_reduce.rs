use super::prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_stops_before_remaining_elements() {
        let mut seen = Vec::new();
        let result = reduce_with(vec![1, 2, 3, 4, 5], 0, |acc, x| {
            seen.push(x);
            if x > 3 {
                done(*acc).into()
            } else {
                Step::next(acc + x)
            }
        });
        assert_eq!(result, 6);
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_reduce_empty_box_keeps_accumulator() {
        let result = reduce_with(vec![1, 2, 3], 0, |acc, x| {
            if x == 2 {
                done_empty().into()
            } else {
                Step::next(acc + x)
            }
        });
        assert_eq!(result, 1);
    }

    #[test]
    fn test_reduce_on_first_element_done() {
        let result = reduce_with(vec![1, 2, 3], 100, |_, _| Step::<i32>::done_empty());
        assert_eq!(result, 100);
    }

    #[test]
    fn test_step_can_inspect_signal() {
        let step = |acc: &i32, x: i32| -> Step<i32> {
            if x < 0 {
                Step::done(*acc)
            } else {
                Step::next(acc + x)
            }
        };
        let signal = step(&3, -1);
        assert!(is_done(&signal, Some(false)));
        if let Step::Done(boxed) = signal {
            assert_eq!(boxed.into_value(), Ok(3));
        }
    }
}
