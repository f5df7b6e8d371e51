#[cfg(test)]
mod tests {
    use std::fs;
    use std::num::NonZero;

    use crate::{solve, Bank, BoatLoad, Capacity, Configuration, PathError, Puzzle, Report, Side, StateSpace};
    use crate::Side::{Left, Right};

    fn capacity(seats: usize) -> Capacity {
        NonZero::new(seats).unwrap()
    }

    fn configurations(raw: &[(usize, usize, usize, usize, Side)]) -> Vec<Configuration> {
        raw.iter().copied().map(Configuration::from).collect()
    }

    #[test]
    fn solve_classic() {
        let solution = solve(3, 3, capacity(2));

        assert!(solution.found());
        assert_eq!(solution.path(), configurations(&[
            (3, 3, 0, 0, Left),
            (3, 1, 0, 2, Right),
            (3, 2, 0, 1, Left),
            (3, 0, 0, 3, Right),
            (3, 1, 0, 2, Left),
            (1, 1, 2, 2, Right),
            (2, 2, 1, 1, Left),
            (0, 2, 3, 1, Right),
            (0, 3, 3, 0, Left),
            (0, 1, 3, 2, Right),
            (0, 2, 3, 1, Left),
            (0, 0, 3, 3, Right),
        ]));
        assert_eq!(solution.crossings(), 11);
        assert_eq!(Puzzle::new(3, 3, capacity(2)).verify(solution.path()), Ok(()));
    }

    #[test]
    fn solve_is_deterministic() {
        assert_eq!(solve(3, 3, capacity(2)), solve(3, 3, capacity(2)));
        assert_eq!(solve(5, 5, capacity(3)), solve(5, 5, capacity(3)));
    }

    #[test]
    fn nobody_to_carry() {
        // the boat never crosses empty, so it can never reach the right bank
        let solution = solve(0, 0, capacity(2));

        assert!(!solution.found());
        assert!(solution.path().is_empty());
        assert_eq!(solution.explored(), 1);
    }

    #[test]
    fn lone_missionary() {
        let solution = solve(1, 0, capacity(2));

        assert!(solution.found());
        assert_eq!(solution.path(), configurations(&[(1, 0, 0, 0, Left), (0, 0, 1, 0, Right)]));
    }

    #[test]
    fn only_cannibals() {
        let solution = solve(0, 3, capacity(2));

        assert_eq!(solution.path(), configurations(&[
            (0, 3, 0, 0, Left),
            (0, 1, 0, 2, Right),
            (0, 2, 0, 1, Left),
            (0, 0, 0, 3, Right),
        ]));
    }

    #[test]
    fn too_many_for_small_boat() {
        let solution = solve(4, 4, capacity(2));

        assert!(!solution.found());
        assert!(solution.path().is_empty());
        assert_eq!(solution.explored(), 11);

        assert!(!solve(6, 6, capacity(3)).found());
        assert!(!solve(1, 1, capacity(1)).found());
    }

    #[test]
    fn bigger_boat_helps() {
        for (people, seats, length) in [(4, 3, 14), (5, 3, 16), (5, 4, 16)] {
            let puzzle = Puzzle::new(people, people, capacity(seats));
            let solution = puzzle.solve();

            assert!(solution.found());
            assert_eq!(solution.path().len(), length);
            assert_eq!(puzzle.verify(solution.path()), Ok(()));
        }
    }

    #[test]
    fn deep_search_does_not_exhaust_the_stack() {
        let puzzle = Puzzle::new(10_000, 0, capacity(2));
        let solution = puzzle.solve();

        assert!(solution.found());
        assert_eq!(solution.path().len(), 19_998);
        assert_eq!(puzzle.verify(solution.path()), Ok(()));
    }

    #[test]
    fn huge_boat() {
        let puzzle = Puzzle::new(3, 3, capacity(usize::MAX));
        let solution = puzzle.solve();

        assert!(solution.found());
        assert_eq!(puzzle.verify(solution.path()), Ok(()));
        assert_eq!(solution, solve(3, 3, capacity(6)));
    }

    #[test]
    fn unsafe_start_is_not_searched() {
        let solution = solve(2, 3, capacity(2));

        assert!(!solution.found());
        assert!(solution.path().is_empty());
        assert_eq!(solution.explored(), 0);
    }

    #[test]
    fn solutions_agree_with_state_space() {
        for missionaries in 0..=5 {
            for cannibals in 0..=5 {
                for seats in 1..=3 {
                    let puzzle = Puzzle::new(missionaries, cannibals, capacity(seats));
                    let solution = puzzle.solve();
                    let space = StateSpace::explore(&puzzle);

                    assert_eq!(solution.found(), space.goal_reachable(), "{puzzle:?}");
                    match space.minimum_crossings() {
                        Some(minimum) => {
                            assert_eq!(puzzle.verify(solution.path()), Ok(()), "{puzzle:?}");
                            assert!(solution.crossings() >= minimum, "{puzzle:?}");
                        }
                        // exhausting the search means visiting the whole reachable space
                        None => assert_eq!(solution.explored(), space.len(), "{puzzle:?}"),
                    }
                }
            }
        }
    }

    #[test]
    fn load_order() {
        let loads = BoatLoad::all(capacity(2))
            .map(|load| (load.missionaries(), load.cannibals()))
            .collect::<Vec<_>>();
        assert_eq!(loads, vec![(0, 1), (0, 2), (1, 0), (1, 1), (2, 0)]);

        assert_eq!(BoatLoad::all(capacity(1)).collect::<Vec<_>>(), vec![BoatLoad::new(0, 1), BoatLoad::new(1, 0)]);
        assert_eq!(BoatLoad::all(capacity(3)).count(), 9);
    }

    #[test]
    fn boardable_loads() {
        assert_eq!(
            BoatLoad::boardable(capacity(2), Bank::new(1, 3)).collect::<Vec<_>>(),
            vec![BoatLoad::new(0, 1), BoatLoad::new(0, 2), BoatLoad::new(1, 0), BoatLoad::new(1, 1)],
        );
        assert_eq!(BoatLoad::boardable(capacity(2), Bank::new(0, 0)).count(), 0);
        assert_eq!(BoatLoad::boardable(capacity(usize::MAX), Bank::new(2, 1)).count(), 5);

        for bank in [Bank::new(0, 5), Bank::new(1, 1), Bank::new(4, 4)] {
            let filtered = BoatLoad::all(capacity(3))
                .filter(|load| load.missionaries() <= bank.missionaries() && load.cannibals() <= bank.cannibals())
                .collect::<Vec<_>>();
            assert_eq!(BoatLoad::boardable(capacity(3), bank).collect::<Vec<_>>(), filtered);
        }
    }

    #[test]
    fn crossing() {
        let start = Configuration::initial(3, 3);

        assert_eq!(start.cross(BoatLoad::new(1, 1)), Some(Configuration::from((2, 2, 1, 1, Right))));
        assert_eq!(start.cross(BoatLoad::new(4, 0)), None);

        let back = Configuration::from((2, 2, 1, 1, Right));
        assert_eq!(back.cross(BoatLoad::new(1, 0)), Some(Configuration::from((3, 2, 0, 1, Left))));
        assert_eq!(back.cross(BoatLoad::new(0, 2)), None);
    }

    #[test]
    fn load_between() {
        let before = Configuration::from((3, 3, 0, 0, Left));

        assert_eq!(
            BoatLoad::between(&before, &Configuration::from((2, 2, 1, 1, Right))),
            Some(BoatLoad::new(1, 1)),
        );
        // boat did not move
        assert_eq!(BoatLoad::between(&before, &Configuration::from((2, 2, 1, 1, Left))), None);
        // nobody rowed
        assert_eq!(BoatLoad::between(&before, &Configuration::from((3, 3, 0, 0, Right))), None);
        // people appeared out of nowhere
        assert_eq!(BoatLoad::between(&before, &Configuration::from((2, 3, 1, 1, Right))), None);
    }

    #[test]
    fn validity() {
        let puzzle = Puzzle::new(3, 3, capacity(2));

        assert!(puzzle.is_valid(&Configuration::from((3, 3, 0, 0, Left))));
        // cannibals alone are safe
        assert!(puzzle.is_valid(&Configuration::from((3, 0, 0, 3, Right))));
        assert!(puzzle.is_valid(&Configuration::from((0, 2, 3, 1, Right))));
        assert!(!puzzle.is_valid(&Configuration::from((2, 3, 1, 0, Right))));
        assert!(!puzzle.is_valid(&Configuration::from((2, 1, 1, 2, Right))));
    }

    #[test]
    fn goal_needs_boat() {
        let puzzle = Puzzle::new(3, 3, capacity(2));

        assert!(puzzle.is_goal(&Configuration::from((0, 0, 3, 3, Right))));
        assert!(!puzzle.is_goal(&Configuration::from((0, 0, 3, 3, Left))));
        assert!(!puzzle.is_goal(&Configuration::from((0, 1, 3, 2, Right))));
        assert_eq!(puzzle.goal(), Configuration::new(Bank::default(), Bank::new(3, 3), Right));
    }

    #[test]
    fn configuration_order() {
        let mut sorted = configurations(&[
            (1, 0, 0, 0, Right),
            (0, 1, 1, 0, Left),
            (1, 0, 0, 0, Left),
            (0, 1, 0, 1, Right),
        ]);
        sorted.sort();

        assert_eq!(sorted, configurations(&[
            (0, 1, 0, 1, Right),
            (0, 1, 1, 0, Left),
            (1, 0, 0, 0, Left),
            (1, 0, 0, 0, Right),
        ]));
    }

    #[test]
    fn verify_rejects() {
        let puzzle = Puzzle::new(3, 3, capacity(2));
        let path = solve(3, 3, capacity(2)).into_path();

        assert_eq!(puzzle.verify(&[]), Err(PathError::Empty));
        assert_eq!(puzzle.verify(&path[1..]), Err(PathError::WrongStart {
            expected: puzzle.initial(),
            found: path[1],
        }));
        assert_eq!(puzzle.verify(&path[..5]), Err(PathError::NotGoal { found: path[4] }));

        let mut skipped = path.clone();
        skipped.remove(2);
        assert_eq!(puzzle.verify(&skipped), Err(PathError::IllegalCrossing { index: 2 }));

        let mut repeated = path[..3].to_vec();
        repeated.extend_from_slice(&path[1..]);
        assert_eq!(puzzle.verify(&repeated), Err(PathError::Revisit { index: 3, configuration: path[1] }));

        let lost = configurations(&[(3, 3, 0, 0, Left), (2, 3, 1, 0, Right)]);
        assert_eq!(puzzle.verify(&lost), Err(PathError::Unsafe { index: 1, configuration: lost[1] }));

        let leaked = configurations(&[(3, 3, 0, 0, Left), (3, 2, 0, 0, Right)]);
        assert_eq!(puzzle.verify(&leaked), Err(PathError::NotConserved { index: 1, configuration: leaked[1] }));

        // three cannibals at once is fine for a bigger boat only
        let crowded = configurations(&[(0, 3, 0, 0, Left), (0, 0, 0, 3, Right)]);
        assert_eq!(Puzzle::new(0, 3, capacity(2)).verify(&crowded), Err(PathError::IllegalCrossing { index: 1 }));
        assert_eq!(Puzzle::new(0, 3, capacity(3)).verify(&crowded), Ok(()));
    }

    #[test]
    fn state_space() {
        let classic = StateSpace::explore(&Puzzle::new(3, 3, capacity(2)));
        assert_eq!(classic.len(), 16);
        assert!(classic.goal_reachable());
        assert_eq!(classic.minimum_crossings(), Some(11));

        let start = Configuration::initial(3, 3);
        let middle = Configuration::from((1, 1, 2, 2, Right));
        assert!(classic.is_reachable(&start, &middle));
        assert!(classic.is_reachable(&middle, &start));
        assert!(!classic.is_reachable(&start, &Configuration::from((2, 3, 1, 0, Right))));
        assert_eq!(classic.graph().edge_weight(start, Configuration::from((2, 2, 1, 1, Right))), Some(&BoatLoad::new(1, 1)));

        let stuck = StateSpace::explore(&Puzzle::new(4, 4, capacity(2)));
        assert_eq!(stuck.len(), 11);
        assert!(!stuck.goal_reachable());
        assert_eq!(stuck.minimum_crossings(), None);

        let unsafe_start = StateSpace::explore(&Puzzle::new(2, 3, capacity(2)));
        assert!(unsafe_start.is_empty());
        assert_eq!(unsafe_start.minimum_crossings(), None);

        assert_eq!(StateSpace::explore(&Puzzle::new(4, 4, capacity(3))).minimum_crossings(), Some(9));
    }

    #[test]
    fn report() {
        let puzzle = Puzzle::new(1, 0, capacity(2));
        let report = Report::new(&puzzle, &puzzle.solve()).unwrap();

        assert_eq!(report.steps().len(), 2);
        assert_eq!(report.steps()[1].right_missionaries, 1);
        assert_eq!(format!("{}", report), "Solution for Missionaries: 1, Cannibals: 0
Boat capacity: 2
------------------------------------------
Step 0: Left(M:1, C:0) Right(M:0, C:0) Boat:Left
Step 1: Left(M:0, C:0) Right(M:1, C:0) Boat:Right
");

        let unsolvable = Puzzle::new(4, 4, capacity(2));
        assert!(Report::new(&unsolvable, &unsolvable.solve()).is_none());
    }

    #[test]
    fn report_to_file() {
        let puzzle = Puzzle::new(3, 3, capacity(2));
        let report = Report::new(&puzzle, &puzzle.solve()).unwrap();
        let path = std::env::temp_dir().join(format!("rivercross-report-{}.txt", std::process::id()));

        report.write_to(&path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(written, report.to_string());
        assert_eq!(written.lines().count(), 3 + 12);
        assert_eq!(written.lines().last(), Some("Step 11: Left(M:0, C:0) Right(M:3, C:3) Boat:Right"));

        let missing = std::env::temp_dir().join("rivercross-no-such-dir").join("results.txt");
        assert!(report.write_to(&missing).is_err());
    }
}
