//! End-to-end known-answer vectors against the public API, black-box style:
//! hashing a password under a fixed salt must reproduce a known `$2a$`
//! string exactly, and checking a known-good hash must succeed.

#[test]
fn known_answer_vectors_match_exactly() {
	let cases: &[(&str, u32, &str)] = &[
		("", 6, "$2a$06$DCq7YPn5Rq63x1Lad4cll.TV4S6ytwfsfvkgY8jIucDrjc8deX1s."),
		("a", 8, "$2a$08$cfcvVd2aQ8CMvoMpP2EBfeodLEkkFJ9umNEfPD18.hUF62qqlC/V."),
		("abc", 10, "$2a$10$WvvTPHKwdBJ3uk0Z37EMR.hLA2W6N9AEBhEgrAOljy2Ae5MtaSIUi"),
		(
			"abcdefghijklmnopqrstuvwxyz",
			12,
			"$2a$12$D4G5f18o7aMMfwasBL7GpuQWuP3pkrZrOAnqP.bmezbMng.QwJ/pG",
		),
		(
			"~!@#$%^&*()      ~!@#$%^&*()PNBFRD",
			10,
			"$2a$10$LgfYWkbzEvQ4JakH7rOvHe0y8pHKF9OaFgwUZ2q7W2FFZmZzJYlfS",
		),
	];

	for &(password, cost, expected) in cases {
		let parsed = obcrypt::HashString::parse(expected).unwrap();
		let cost = obcrypt::WorkFactor::new(cost).unwrap();
		assert_eq!(parsed.cost, cost);

		let hash = obcrypt::hash_with_salt(password, &parsed.salt, cost).unwrap();
		assert_eq!(hash.as_str(), expected, "mismatch for password {:?}", password);

		assert!(obcrypt::check_password(password, expected).unwrap());
	}
}

#[test]
#[ignore] // expensive: 2^31 expand_key rounds, a timeout-sensitive functional check only.
fn cost_31_completes_and_verifies() {
	let salt = obcrypt::Salt::from_bytes(&[0x5c; 16]);
	let hash = obcrypt::hash_with_salt("slow and steady", &salt, obcrypt::WorkFactor::EXP31).unwrap();
	assert!(obcrypt::check_password("slow and steady", hash.as_str()).unwrap());
}

#[test]
fn check_password_accepts_a_known_good_hash() {
	assert!(obcrypt::check_password(
		"correctbatteryhorsestapler",
		"$2a$12$mACnM5lzNigHMaf7O1py1O3vlf6.BA8k8x3IoJ.Tq3IB/2e7g61Km"
	)
	.unwrap());

	assert!(!obcrypt::check_password(
		"incorrectbatteryhorsestapler",
		"$2a$12$mACnM5lzNigHMaf7O1py1O3vlf6.BA8k8x3IoJ.Tq3IB/2e7g61Km"
	)
	.unwrap());
}
