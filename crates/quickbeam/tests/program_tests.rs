//! Whole-program tests: recursive list utilities written in the language

use pretty_assertions::assert_eq;
use quickbeam::*;

const LIBRARY: &[&str] = &[
    "(defun rev (L R) (cond ((null L) R) (t (rev (cdr L) (cons (car L) R)))))",
    "(defun my-append (L1 L2) (cond ((null L1) L2) (t (cons (car L1) (my-append (cdr L1) L2)))))",
    "(defun my-attach (X Y) (my-append Y (cons X nil)))",
    "(defun my-length (l) (cond ((null l) 0) (t (1+ (my-length (cdr l))))))",
    "(defun my-memq (a l) (cond ((null l) nil) ((eq a (car l)) l) (t (my-memq a (cdr l)))))",
    "(defun my-mapcar (f l) (cond ((null l) nil) (t (cons (apply f (list (car l))) (my-mapcar f (cdr l))))))",
    "(defun my-copy (l) (cond ((null l) nil) ((atom l) l) (t (cons (my-copy (car l)) (my-copy (cdr l))))))",
    "(defun my-nth (l n) (cond ((or (null l) (< n 0)) nil) ((= n 0) l)(t (my-nth (cdr l) (1- n)))))",
    "(defun my-remove (x l) (cond ((null l) nil) ((equal x (car l)) (my-remove x (cdr l))) (t (cons (car l) (my-remove x (cdr l))))))",
    "(defun my-subset (fn l) (cond ((null l) nil) ((apply fn (list (car l))) (cons (car l) (my-subset fn (cdr l)))) (t (my-subset fn (cdr l)))))",
    "(defun my-add (n1 n2) (cond ((and (null n1) (null n2)) nil) ((null n1) n2) ((null n2) n1) (t (let* ((sum (+ (car n1) (car n2))) (digit (mod sum 10)) (carry (floor sum 10))) (if (or (cdr n1) (cdr n2) (not (zerop carry))) (cons digit (my-add (my-add (cdr n1) (cdr n2)) (list carry))) (cons digit nil))))))",
    "(defun my-merge (l1 l2) (cond ((null l1) l2) ((null l2) l1) ((< (car l1) (car l2)) (cons (car l1) (my-merge (cdr l1) l2))) (t (cons (car l2) (my-merge l1 (cdr l2))))))",
    "(defun starts-with (l1 l2) (cond ((null l1) t) ((null l2) nil) ((equal (car l1) (car l2)) (starts-with (cdr l1) (cdr l2))) (t nil)))",
    "(defun my-sublist (l1 l2) (cond ((null l2) nil) ((starts-with l1 l2) t) (t (my-sublist l1 (cdr l2)))))",
    "(defun my-assoc (a alist) (cond ((null alist) nil) ((eq a (car (car alist))) (car alist)) (t (my-assoc a (cdr alist)))))",
];

fn library_session() -> Session {
    let mut session = Session::new();
    for def in LIBRARY {
        session
            .eval_str(def)
            .unwrap_or_else(|err| panic!("failed to define {def}: {err}"));
    }
    session
}

fn check(session: &mut Session, cases: &[(&str, &str)]) {
    for (input, expected) in cases {
        let got = session
            .eval_str(input)
            .unwrap_or_else(|err| panic!("{input} failed: {err}"))
            .to_string();
        assert_eq!(&got, expected, "evaluating {input}");
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Definitions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_library_defines_every_function() {
    let session = library_session();
    assert_eq!(session.env().len(), LIBRARY.len());
    assert_eq!(session.env().global_names()[0], "rev");
    assert_eq!(session.env().global_names()[LIBRARY.len() - 1], "my-assoc");
}

// ═══════════════════════════════════════════════════════════════════════
// Basics shared with the library session
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_basic_forms_in_sequence() {
    let mut session = library_session();
    check(
        &mut session,
        &[
            ("T", "T"),
            ("NIL", "NIL"),
            ("Hello", "Hello"),
            ("10", "10"),
            ("'(A B C)", "(A B C)"),
            ("(eq t t)", "T"),
            ("(eq nil nil)", "T"),
            ("(eq t nil)", "NIL"),
            ("(null nil)", "T"),
            ("(eq 'a 'a)", "T"),
            ("(eq '(a b) '(a b))", "NIL"),
            ("(car '(a b c))", "a"),
            ("(cdr '(a b c))", "(b c)"),
            ("(cons 'd '(a b c))", "(d a b c)"),
            ("(setq a '(a b c))", "(a b c)"),
            ("(rev '(A B C D E) nil)", "(E D C B A)"),
            ("(rev a nil)", "(c b a)"),
            ("(cond (nil 1)(t 2)(t 3))", "2"),
        ],
    );
}

// ═══════════════════════════════════════════════════════════════════════
// List utilities
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_append_and_attach() {
    let mut session = library_session();
    check(
        &mut session,
        &[
            ("(my-append '((a) (b) (c)) '((d) (e) (f)))", "((a) (b) (c) (d) (e) (f))"),
            ("(my-append nil '(d e f))", "(d e f)"),
            ("(my-attach 'd '(a b c))", "(a b c d)"),
            ("(my-attach '(a) '(b c))", "(b c (a))"),
        ],
    );
}

#[test]
fn test_length() {
    let mut session = library_session();
    check(
        &mut session,
        &[
            ("(my-length nil)", "0"),
            ("(my-length '(a b c))", "3"),
            ("(my-length '(B (A B C)))", "2"),
            ("(my-length '(A (((B))) C))", "3"),
        ],
    );
}

#[test]
fn test_memq() {
    let mut session = library_session();
    check(
        &mut session,
        &[
            ("(my-memq 'A nil)", "NIL"),
            ("(my-memq 'B '(A B C))", "(B C)"),
            ("(my-memq 'D '(A B C D E F G))", "(D E F G)"),
            ("(my-memq 'D '(A B C D))", "(D)"),
            ("(my-memq 'D '(A B C))", "NIL"),
        ],
    );
}

#[test]
fn test_mapcar_through_apply() {
    let mut session = library_session();
    check(
        &mut session,
        &[
            ("(my-mapcar 'car '((A B C) (X Y Z) (1 2 3)))", "(A X 1)"),
            ("(my-mapcar 'cdr '((A B C) (X Y Z) (1 2 3)))", "((B C) (Y Z) (2 3))"),
            ("(my-mapcar '1+ '(1 3 5 7))", "(2 4 6 8)"),
            ("(my-mapcar 'atom '(A (B) C (D) E))", "(T NIL T NIL T)"),
            ("(my-mapcar 'my-length '((a) (a b) nil))", "(1 2 0)"),
        ],
    );
}

#[test]
fn test_copy() {
    let mut session = library_session();
    check(
        &mut session,
        &[
            ("(my-copy '(A B ((C 1)) 2 3))", "(A B ((C 1)) 2 3)"),
            ("(my-copy '(1 2 3))", "(1 2 3)"),
            ("(my-copy '(A B . C))", "(A B . C)"),
            ("(eq (setq l '(A (B) C)) (my-copy l))", "NIL"),
            ("(equal l (my-copy l))", "T"),
        ],
    );
}

#[test]
fn test_nth() {
    let mut session = library_session();
    check(
        &mut session,
        &[
            ("(my-nth '(A B C D E) 1)", "(B C D E)"),
            ("(my-nth '(A B C D E) 3)", "(D E)"),
            ("(my-nth '(A B C D E) 30)", "NIL"),
            ("(my-nth '(A B C D E) 0)", "(A B C D E)"),
        ],
    );
}

#[test]
fn test_remove_and_subset() {
    let mut session = library_session();
    check(
        &mut session,
        &[
            ("(my-remove '(A B) '(A B (A B) A A B (A B)))", "(A B A A B)"),
            ("(my-remove 'A '(A B (A B) A B))", "(B (A B) B)"),
            ("(my-subset 'atom '(A (B) (C D) E F G))", "(A E F G)"),
            ("(my-subset 'listp '(A (B) (C D) E F G))", "((B) (C D))"),
        ],
    );
}

#[test]
fn test_digit_list_addition() {
    let mut session = library_session();
    check(
        &mut session,
        &[
            ("(my-add '(0) '(0))", "(0)"),
            ("(my-add '(1) '(1))", "(2)"),
            ("(my-add '(9) '(9))", "(8 1)"),
            (
                "(my-add '(1 1 1 1 1 1 1 1 1 1) '(9 9 9 9 9 9 9 9 9 9))",
                "(0 1 1 1 1 1 1 1 1 1 1)",
            ),
            ("(my-add '(1) '(9 9 9 9 9 9 9 9 9 9))", "(0 0 0 0 0 0 0 0 0 0 1)"),
        ],
    );
}

#[test]
fn test_merge() {
    let mut session = library_session();
    check(
        &mut session,
        &[
            ("(my-merge '(1 3 5 7 9) '(2 4 6 8 10))", "(1 2 3 4 5 6 7 8 9 10)"),
            ("(my-merge '(1 2 3 7 8 9) '(4 5 6 10))", "(1 2 3 4 5 6 7 8 9 10)"),
            ("(my-merge '(1 2 3) '(4 5 6 7 8 9 10))", "(1 2 3 4 5 6 7 8 9 10)"),
            ("(my-merge '(1 3 5 6 7 8 9 10) '(2 4))", "(1 2 3 4 5 6 7 8 9 10)"),
            ("(my-merge NIL '(1 2 3 4 5 6 7 8 9 10))", "(1 2 3 4 5 6 7 8 9 10)"),
        ],
    );
}

#[test]
fn test_sublist() {
    let mut session = library_session();
    check(
        &mut session,
        &[
            ("(my-sublist '(1 2 3) '(1 2 3 4 5))", "T"),
            ("(my-sublist '(3 4 5) '(1 2 3 4 5))", "T"),
            ("(my-sublist '(C D) '(A B C D E))", "T"),
            ("(my-sublist '(3 4) '(1 2 3 5 6))", "NIL"),
            ("(my-sublist '(1 2 3 4 5) '(3 4 5))", "NIL"),
            ("(my-sublist '(2 4) '(1 2 3 4 5))", "NIL"),
            ("(my-sublist '(1 3 5) '(1 2 3 4 5))", "NIL"),
        ],
    );
}

#[test]
fn test_assoc() {
    let mut session = library_session();
    check(
        &mut session,
        &[
            ("(my-assoc 'a nil)", "NIL"),
            ("(my-assoc 'a '((a . b) (c e f) (b)))", "(a . b)"),
            ("(my-assoc 'c '((a . b) (c e f) (b)))", "(c e f)"),
            ("(my-assoc 'b '((a . b) (c e f) (b)))", "(b)"),
            ("(my-assoc 'f '((a . b) (c e f) (b)))", "NIL"),
        ],
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Higher-order programs
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_lambda_bound_globally_works_with_mapcar() {
    let mut session = library_session();
    check(
        &mut session,
        &[
            ("(setq square (lambda (x) (* x x)))", "((x) (* x x))"),
            ("(my-mapcar 'square '(1 2 3 4))", "(1 4 9 16)"),
        ],
    );
}

#[test]
fn test_factorial_and_fibonacci() {
    let mut session = Session::new();
    check(
        &mut session,
        &[
            ("(defun fact (n) (if (zerop n) 1 (* n (fact (1- n)))))", "fact"),
            ("(fact 10)", "3628800"),
            ("(fact 20)", "2432902008176640000"),
            (
                "(defun fib (n) (if (< n 2) n (+ (fib (- n 1)) (fib (- n 2)))))",
                "fib",
            ),
            ("(fib 15)", "610"),
        ],
    );
}
