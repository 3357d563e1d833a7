/*!
# `IF <expression> <comparison> <expression> THEN <line number>`

## Purpose
Jump to a line when a comparison holds.

## Remarks
`<comparison>` is one of `=`, `<` or `>`. The target line is checked
before the comparison, so a missing line is a `LINE NUMBER ERROR`
even when the jump would not be taken. Not allowed in direct mode.

## Example
```text
10 LET N = 3
20 PRINT N
30 LET N = N - 1
40 IF N > 0 THEN 20
RUN
3
2
1
```

*/
