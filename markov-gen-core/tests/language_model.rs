use markov_gen_core::{CharCount, Error, LanguageModel, ModelConfig};

const CORPUS: &str = "the cat sat on the mat. the rat ate the hat. that cat and that rat sat on that mat.";

fn trained(window_length: usize, seed: u64, text: &str) -> LanguageModel {
	let mut model = LanguageModel::with_seed(window_length, seed).unwrap();
	model.train(text);
	model
}

fn order(model: &LanguageModel, window: &str) -> String {
	model.frequencies(window).unwrap().iter().map(CharCount::character).collect()
}

#[test]
fn zero_window_length_is_rejected() {
	assert!(matches!(LanguageModel::new(0), Err(Error::InvalidWindowLength)));
	assert!(matches!(LanguageModel::with_seed(0, 1), Err(Error::InvalidWindowLength)));
}

#[test]
fn same_seed_same_output() {
	let first = trained(2, 42, CORPUS).generate("th", 200).unwrap();
	let second = trained(2, 42, CORPUS).generate("th", 200).unwrap();
	assert_eq!(first, second);
	assert!(first.starts_with("th"));
}

#[test]
fn config_and_constructor_agree() {
	let config = ModelConfig::new(3).unwrap().with_seed(9);
	let mut from_config = LanguageModel::from_config(&config);
	from_config.train(CORPUS);
	let expected = trained(3, 9, CORPUS).generate("the", 100).unwrap();
	assert_eq!(from_config.generate("the", 100).unwrap(), expected);
}

#[test]
fn counts_match_window_occurrences() {
	let window_length = 2;
	let model = trained(window_length, 0, CORPUS);
	let chars: Vec<char> = CORPUS.chars().collect();

	for start in 0..chars.len() - window_length {
		let window: String = chars[start..start + window_length].iter().collect();
		let expected = (0..chars.len() - window_length)
			.filter(|&i| chars[i..i + window_length].iter().copied().eq(window.chars()))
			.count();
		assert_eq!(model.frequencies(&window).unwrap().total_count(), expected, "window {:?}", window);
	}
}

#[test]
fn every_key_has_window_length_chars() {
	let model = trained(4, 0, "héllo wörld, héllo wörld");
	assert!(model.window_count() > 0);
	assert!(model.frequencies("héll").is_some());
	assert!(model.frequencies("hél").is_none());
}

#[test]
fn distributions_are_ready_after_training() {
	let model = trained(1, 0, CORPUS);
	let list = model.frequencies("t").unwrap();
	let sum: f64 = list.iter().map(CharCount::probability).sum();
	assert!((sum - 1.0).abs() < 1e-9);
	let last = list.get(list.len() - 1).unwrap();
	assert_eq!(last.cumulative_probability(), 1.0);
}

#[test]
fn front_insertion_order() {
	let model = trained(1, 0, "aabac");
	assert_eq!(order(&model, "a"), "cba");
	assert_eq!(order(&model, "b"), "a");
	assert!(model.frequencies("c").is_none());
	assert_eq!(model.frequencies("a").unwrap().to_string(), "((c 1 0.3333333333333333 0.3333333333333333) (b 1 0.3333333333333333 0.6666666666666666) (a 1 0.3333333333333333 1))");
}

#[test]
fn training_clears_previous_state() {
	let mut model = trained(2, 0, "abcdef");
	assert!(model.frequencies("ab").is_some());
	model.train("xyz");
	assert!(model.frequencies("ab").is_none());
	assert_eq!(model.window_count(), 1);
	model.train("x");
	assert_eq!(model.window_count(), 0);
}

#[test]
fn seed_shorter_than_window_is_returned_unchanged() {
	let mut model = trained(4, 1, CORPUS);
	for n in [0, 1, 50] {
		assert_eq!(model.generate("the", n).unwrap(), "the");
	}
	assert_eq!(model.generate("", 10).unwrap(), "");
}

#[test]
fn corpus_too_short_yields_no_generation() {
	let mut model = trained(5, 1, "abc");
	assert_eq!(model.window_count(), 0);
	assert_eq!(model.generate("abc", 10).unwrap(), "abc");
	assert_eq!(model.generate("abcde", 10).unwrap(), "abcde");
}

#[test]
fn stops_on_unseen_window() {
	// "c" is never followed by anything
	let mut model = trained(1, 3, "abc");
	assert_eq!(model.generate("a", 10).unwrap(), "abc");
	assert_eq!(model.generate("z", 10).unwrap(), "z");
}

#[test]
fn huge_text_length_stops_on_unseen_window() {
	let mut model = trained(1, 3, "abc");
	assert_eq!(model.generate("a", usize::MAX).unwrap(), "abc");
}

#[test]
fn reaches_target_length() {
	// every window has a successor in a cyclic corpus
	let mut model = trained(2, 5, "abcabcabca");
	let out = model.generate("ab", 30).unwrap();
	assert_eq!(out.chars().count(), 32);
	assert!(out.starts_with("abcabc"));
	assert_eq!(model.generate("ab", 0).unwrap(), "ab");
}

#[test]
fn generated_text_only_uses_seen_transitions() {
	let window_length = 3;
	let mut model = trained(window_length, 11, CORPUS);
	let out: Vec<char> = model.generate("the", 300).unwrap().chars().collect();
	for i in 0..out.len() - window_length {
		let window: String = out[i..i + window_length].iter().collect();
		let list = model.frequencies(&window).unwrap();
		assert!(list.index_of(out[i + window_length]).is_some());
	}
}

#[test]
fn recomputing_probabilities_is_idempotent() {
	let model = trained(1, 0, CORPUS);
	let mut list = model.frequencies("a").unwrap().clone();
	LanguageModel::calculate_probabilities(&mut list);
	let first = list.to_vec();
	LanguageModel::calculate_probabilities(&mut list);
	assert_eq!(first, list.to_vec());
}

#[test]
fn random_char_comes_from_list() {
	let mut model = trained(1, 21, CORPUS);
	let list = model.frequencies("h").unwrap().clone();
	for _ in 0..50 {
		let c = model.get_random_char(&list).unwrap();
		assert!(list.index_of(c).is_some());
	}
}

#[test]
fn train_from_missing_file_keeps_model() {
	let mut model = trained(2, 0, CORPUS);
	let count = model.window_count();
	let err = model.train_from_file("no/such/corpus.txt").unwrap_err();
	assert!(matches!(err, Error::Io { .. }));
	assert_eq!(model.window_count(), count);
}

#[test]
fn train_from_file() {
	let path = std::env::temp_dir().join("markov_gen_core_train_from_file.txt");
	std::fs::write(&path, "aabac").unwrap();
	let mut model = LanguageModel::with_seed(1, 0).unwrap();
	model.train_from_file(&path).unwrap();
	std::fs::remove_file(&path).unwrap();
	assert_eq!(order(&model, "a"), "cba");
}

#[test]
fn display_lists_windows_in_order() {
	let model = trained(1, 0, "aabac");
	let rendered = model.to_string();
	let lines: Vec<&str> = rendered.lines().collect();
	assert_eq!(lines.len(), 2);
	assert!(lines[0].starts_with("\"a\" ("));
	assert_eq!(lines[1], "\"b\" ((a 1 1 1))");
}
