/*!
# `[LET] <variable> = <expression>`

## Purpose
Assign a value to the variable.

## Remarks
The word `LET` is optional. Variable names are case sensitive and
may not be a keyword.

## Example
```text
10 A = 10
20 PRINT A
30 LET A = A * 2
40 PRINT A
RUN
10
20
```

*/
