use std::process::{Command, Output};

fn oracle(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_curve-oracle"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn curve-oracle")
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).unwrap()
}

fn stderr(output: &Output) -> &str {
    std::str::from_utf8(&output.stderr).unwrap()
}

#[test]
fn test_ecdsa_pub_key() {
    let x = oracle(&["getECDSAPubKey", "1", "X"]);
    assert!(x.status.success(), "{}", stderr(&x));
    assert_eq!(
        stdout(&x),
        "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\n"
    );

    let y = oracle(&["getECDSAPubKey", "1", "Y"]);
    assert!(y.status.success(), "{}", stderr(&y));
    assert_eq!(
        stdout(&y),
        "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8\n"
    );
}

#[test]
fn test_g2_point() {
    let expected = [
        ("1", "0x1800DEEF121F1E76426A00665E5C4479674322D4F75EDADD46DEBD5CD992F6ED"),
        ("2", "0x198E9393920D483A7260BFB731FB5D25F1AA493335A9E71297E485B7AEF312C2"),
        ("3", "0x12C85EA5DB8C6DEB4AAB71808DCB408FE3D1E7690C43D37B4CE6CC0166FA7DAA"),
        ("4", "0x090689D0585FF075EC9E99AD690C3395BC4B313370B38EF355ACDADCD122975B"),
    ];
    for (limb, hex) in expected {
        let output = oracle(&["computeG2Point", "1", limb]);
        assert!(output.status.success(), "{}", stderr(&output));
        assert_eq!(stdout(&output), hex);
    }

    let zero = oracle(&["computeG2Point", "0", "4"]);
    assert!(zero.status.success(), "{}", stderr(&zero));
    assert_eq!(stdout(&zero), format!("0x{}", "0".repeat(64)));
}

#[test]
fn test_failures_write_nothing_to_stdout() {
    let cases: [(&[&str], &str); 10] = [
        (&["computeG2Point", "12x4", "1"], "not a decimal integer"),
        (&["getECDSAPubKey", "12x4", "X"], "not a decimal integer"),
        (&["computeG2Point", "-5", "1"], "not a decimal integer"),
        (&["getECDSAPubKey", "-5", "X"], "not a decimal integer"),
        (&["computeG2Point", "1", "-1"], "unknown limb selector"),
        (&["computeG2Point", "1", "5"], "unknown limb selector"),
        (&["getECDSAPubKey", "1", "Z"], "unknown coordinate selector"),
        (&["getECDSAPubKey", "0", "X"], "invalid secp256k1 private key"),
        (&["deriveSomething", "1", "1"], "unknown command"),
        (&["getECDSAPubKey", "-1", "Y"], "scalar"),
    ];
    for (args, message) in cases {
        let output = oracle(args);
        assert_eq!(output.status.code(), Some(1), "{args:?}");
        assert!(output.stdout.is_empty(), "{args:?}");
        assert!(
            stderr(&output).contains(message),
            "{args:?}: {}",
            stderr(&output)
        );
    }
}

#[test]
fn test_missing_arguments() {
    let output = oracle(&["computeG2Point", "1"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_input_errors_have_no_backtrace() {
    let output = Command::new(env!("CARGO_BIN_EXE_curve-oracle"))
        .args(["getECDSAPubKey", "-5", "X"])
        .env_remove("RUST_LOG")
        .env("RUST_BACKTRACE", "1")
        .output()
        .expect("failed to spawn curve-oracle");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("not a decimal integer"));
    assert!(!stderr(&output).contains("error backtrace"));
}
