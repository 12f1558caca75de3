use proptest::prelude::*;

use super::*;

// Defines an arbitrary list containing elements from -10000 to 10000
fn list_strategy_from_iterator() -> impl Strategy<Value = DynamicList<isize>> {
    prop::collection::vec(-10000..10000isize, 0..1000).prop_map(|x| x.into_iter().collect())
}

// Generate arbitrary sequence of manipulations to both a vector and a list
// Apply those manipulations in order, then check that the state of both is the same
// Indices can overshoot the length so that the error paths get exercised too
#[derive(Debug, Clone)]
enum Action {
    Push(usize),
    Insert(usize, usize),
    Set(usize, usize),
    Remove(usize),
    Split(usize),
    Sort,
    Clear,
}

impl Action {
    fn act_on_vector(self, mut vec: Vec<usize>) -> Vec<usize> {
        match self {
            Action::Push(value) => vec.push(value),
            Action::Insert(index, value) => {
                if index <= vec.len() {
                    vec.insert(index, value);
                }
            }
            Action::Set(index, value) => {
                if let Some(slot) = vec.get_mut(index) {
                    *slot = value;
                }
            }
            Action::Remove(index) => {
                if index < vec.len() {
                    vec.remove(index);
                }
            }
            Action::Split(new_size) => {
                if new_size <= vec.len() {
                    vec.truncate(new_size);
                }
            }
            Action::Sort => vec.sort(),
            Action::Clear => vec.clear(),
        }
        vec
    }

    fn act_on_list(self, mut list: DynamicList<usize>) -> DynamicList<usize> {
        let len = list.len();
        let capacity = list.capacity();

        match self {
            Action::Push(value) => {
                list.push(value);
                assert_eq!(list.len(), len + 1);
            }
            Action::Insert(index, value) => {
                let result = list.insert(index, value);
                assert_eq!(result.is_ok(), index <= len);
                if result.is_err() {
                    assert_eq!(list.capacity(), capacity);
                }
            }
            Action::Set(index, value) => {
                let previous = list.get(index).ok().copied();
                let result = list.set(index, value);
                assert_eq!(result.ok(), previous);
                if previous.is_some() {
                    assert_eq!(list.get(index), Ok(&value));
                }
            }
            Action::Remove(index) => {
                let expected = list.get(index).ok().copied();
                assert_eq!(list.remove(index).ok(), expected);
                assert_eq!(list.capacity(), capacity);
            }
            Action::Split(new_size) => match list.split(new_size) {
                Ok(()) => {
                    assert_eq!(list.len(), new_size);
                    assert_eq!(list.capacity(), new_size);
                }
                Err(err) => {
                    assert!(new_size > len);
                    assert_eq!(err, ListError::InvalidSize { new_size, len });
                }
            },
            Action::Sort => {
                list.quick_sort(Ord::cmp);
                assert!(list.is_sorted());
            }
            Action::Clear => {
                list.clear();
                assert_eq!(list.capacity(), DEFAULT_CAPACITY);
            }
        }

        list
    }
}

fn crunch_actions_for_vec(initial: Vec<usize>, actions: Vec<Action>) -> Vec<usize> {
    actions
        .into_iter()
        .fold(initial, |vec, action| action.act_on_vector(vec))
}

fn crunch_actions_for_list(initial: DynamicList<usize>, actions: Vec<Action>) -> DynamicList<usize> {
    actions.into_iter().fold(initial, |list, action| {
        let res = action.act_on_list(list);
        res.assert_invariants();
        res
    })
}

// Keeps indices mostly in range, with some overshoot
fn index_strategy() -> impl Strategy<Value = usize> {
    0..300usize
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => any::<usize>().prop_map(Action::Push),
        3 => (index_strategy(), any::<usize>()).prop_map(|(i, v)| Action::Insert(i, v)),
        2 => (index_strategy(), any::<usize>()).prop_map(|(i, v)| Action::Set(i, v)),
        3 => index_strategy().prop_map(Action::Remove),
        1 => index_strategy().prop_map(Action::Split),
        1 => Just(Action::Sort),
        1 => Just(Action::Clear),
    ]
}

fn actions_strategy() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(action_strategy(), 0..50)
}

fn vec_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..10000usize, 0..256)
}

proptest! {
    #[test]
    fn operations_in_order_match(vec in vec_strategy(), actions in actions_strategy()) {
        random_test_runner(vec, actions);
    }

    #[test]
    fn list_creation_from_iterator_has_correct_number_of_values(size in 0..10000usize) {
        let list = (0..size).collect::<DynamicList<_>>();
        assert_eq!(list.len(), size);
        assert_eq!(list.capacity(), size);
    }

    #[test]
    fn indexing_correctly_lines_up(size in 0..2000usize) {
        let list = (0..size).collect::<DynamicList<_>>();
        for i in 0..list.len() {
            assert_eq!(i, *list.get(i).unwrap());
        }
        assert!(list.get(size).is_err());
    }

    #[test]
    fn sorting_matches_vec(mut vec in vec_strategy()) {
        let mut list: DynamicList<_> = vec.clone().into();
        list.quick_sort(Ord::cmp);
        vec.sort();
        assert!(list.is_sorted());
        assert_eq!(list, DynamicList::from(vec));
    }

    #[test]
    fn descending_sort_matches_vec(list in list_strategy_from_iterator()) {
        let mut expected: Vec<isize> = (0..list.len()).map(|i| *list.get(i).unwrap()).collect();
        let mut sorted = list;

        sorted.quick_sort(|a, b| b.cmp(a));
        expected.sort_by(|a, b| b.cmp(a));

        assert_eq!(sorted, DynamicList::from(expected));
    }

    #[test]
    fn insert_then_remove_leaves_contents(list in list_strategy_from_iterator(), index in 0..1001usize, value in any::<isize>()) {
        let mut list = list;
        let original = list.clone();
        let index = index.min(list.len());

        list.insert(index, value).unwrap();
        assert_eq!(list.remove(index), Ok(value));
        assert_eq!(list, original);
    }

    #[test]
    fn split_keeps_prefix(list in list_strategy_from_iterator(), new_size in 0..1001usize) {
        let mut truncated = list.clone();
        let new_size = new_size.min(list.len());

        truncated.split(new_size).unwrap();

        truncated.assert_invariants();
        assert_eq!(truncated.len(), new_size);
        for i in 0..new_size {
            assert_eq!(truncated.get(i), list.get(i));
        }
        assert!(truncated.get(new_size).is_err());
    }

    #[test]
    fn pushes_track_growth_policy(count in 0..500usize, initial in 0..20usize) {
        let mut list = DynamicList::with_capacity(initial);
        let mut expected = initial;
        for i in 0..count {
            if i + 1 > expected {
                expected = crate::backing::grown_capacity(expected, i + 1);
            }
            list.push(i);
            assert_eq!(list.capacity(), expected);
        }
    }
}

fn random_test_runner(vec: Vec<usize>, actions: Vec<Action>) {
    let initial_list: DynamicList<usize> = vec.clone().into_iter().collect();

    let resulting_list = crunch_actions_for_list(initial_list, actions.clone());
    let resulting_vector = crunch_actions_for_vec(vec, actions);

    resulting_list.assert_invariants();

    assert_eq!(resulting_list.len(), resulting_vector.len());
    assert_eq!(resulting_list, DynamicList::from(resulting_vector));
}

#[test]
fn remove_from_front_after_growth() {
    use Action::*;

    let vec = vec![7, 3, 9];

    let actions = vec![
        Push(1),
        Push(2),
        Insert(0, 100),
        Remove(0),
        Remove(4),
        Remove(0),
        Split(2),
        Push(5),
    ];

    random_test_runner(vec, actions);
}

#[test]
fn clear_then_reuse() {
    use Action::*;

    let vec = (0..40).collect();

    let actions = vec![Clear, Insert(1, 4), Insert(0, 4), Push(3), Sort, Set(1, 0), Remove(9)];

    random_test_runner(vec, actions);
}
